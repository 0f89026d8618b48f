use crate::game_state::chess_types::*;
use crate::moves::line_paths::{destination_is_open, is_diagonal_line, path_is_clear};

/// Bishop: along a diagonal through empty squares, onto an empty or enemy square.
pub fn is_legal_bishop_move(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    is_diagonal_line(start, end)
        && path_is_clear(board, start, end)
        && destination_is_open(board, end, piece.color)
}

#[cfg(test)]
mod tests {
    use super::is_legal_bishop_move;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_from_d4_covers_thirteen_squares_on_empty_board() {
        let mut board = Board::empty();
        board.place(sq(4, 3), Color::Dark, PieceKind::Bishop);
        let bishop = *board.piece_at(sq(4, 3)).expect("bishop was placed");
        let reachable: Vec<Square> = Square::all()
            .filter(|end| is_legal_bishop_move(&board, &bishop, sq(4, 3), *end))
            .collect();
        assert_eq!(reachable.len(), 13);
        assert!(reachable.contains(&sq(0, 7)));
        assert!(reachable.contains(&sq(7, 0)));
        assert!(!reachable.contains(&sq(4, 4)));
    }

    #[test]
    fn bishop_is_blocked_by_any_color() {
        for blocker_color in [Color::Light, Color::Dark] {
            let mut board = Board::empty();
            board.place(sq(7, 2), Color::Light, PieceKind::Bishop);
            board.place(sq(5, 4), blocker_color, PieceKind::Pawn);
            let bishop = *board.piece_at(sq(7, 2)).expect("bishop was placed");
            assert!(is_legal_bishop_move(&board, &bishop, sq(7, 2), sq(6, 3)));
            assert!(!is_legal_bishop_move(&board, &bishop, sq(7, 2), sq(4, 5)));
            assert!(!is_legal_bishop_move(&board, &bishop, sq(7, 2), sq(2, 7)));
        }
    }

    #[test]
    fn bishop_in_starting_position_cannot_move() {
        let board = Board::standard();
        let bishop = *board.piece_at(sq(7, 2)).expect("c1 bishop");
        assert!(Square::all().all(|end| !is_legal_bishop_move(&board, &bishop, sq(7, 2), end)));
    }
}
