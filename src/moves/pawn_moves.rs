//! Pawn legality: single step, double step, diagonal capture, en passant.

use crate::game_state::chess_types::*;

/// Checks the four pawn branches in turn; any match makes the move legal.
///
/// `last_double` is the square of the pawn that made the most recent
/// two-square advance, if that advance was the previous half-move.
pub fn is_legal_pawn_move(
    board: &Board,
    piece: &Piece,
    start: Square,
    end: Square,
    last_double: Option<Square>,
) -> bool {
    is_single_step(board, piece, start, end)
        || is_double_step(board, piece, start, end)
        || is_diagonal_capture(board, piece, start, end)
        || is_en_passant_capture(board, piece, start, end, last_double)
}

fn is_single_step(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    start.delta_to(end) == (piece.color.pawn_direction(), 0) && board.is_empty(end)
}

fn is_double_step(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    let direction = piece.color.pawn_direction();
    if start.row() != piece.color.pawn_start_row() || start.delta_to(end) != (2 * direction, 0) {
        return false;
    }
    let Some(middle) = start.offset(direction, 0) else {
        return false;
    };
    board.is_empty(middle) && board.is_empty(end)
}

fn is_diagonal_capture(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    d_row == piece.color.pawn_direction()
        && d_col.abs() == 1
        && board.has_color(end, piece.color.opposite())
}

/// Diagonal step onto an empty square behind an enemy pawn that just double-stepped.
pub fn is_en_passant_capture(
    board: &Board,
    piece: &Piece,
    start: Square,
    end: Square,
    last_double: Option<Square>,
) -> bool {
    let Some(last_double) = last_double else {
        return false;
    };
    let (d_row, d_col) = start.delta_to(end);
    if start.row() != piece.color.en_passant_row()
        || d_row != piece.color.pawn_direction()
        || d_col.abs() != 1
        || end.col() != last_double.col()
        || !board.is_empty(end)
    {
        return false;
    }

    let Some(beside) = Square::new(start.row(), end.col()) else {
        return false;
    };
    beside == last_double
        && board.piece_at(beside).is_some_and(|victim| {
            victim.kind == PieceKind::Pawn && victim.color == piece.color.opposite()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_at(board: &Board, square: Square) -> Piece {
        *board.piece_at(square).expect("pawn should be on the board")
    }

    #[test]
    fn starting_pawns_step_one_or_two() {
        let board = Board::standard();
        let white = pawn_at(&board, sq(6, 4));
        let black = pawn_at(&board, sq(1, 3));
        assert!(is_legal_pawn_move(&board, &white, sq(6, 4), sq(5, 4), None));
        assert!(is_legal_pawn_move(&board, &white, sq(6, 4), sq(4, 4), None));
        assert!(!is_legal_pawn_move(&board, &white, sq(6, 4), sq(3, 4), None));
        assert!(!is_legal_pawn_move(&board, &white, sq(6, 4), sq(7, 4), None));
        assert!(is_legal_pawn_move(&board, &black, sq(1, 3), sq(2, 3), None));
        assert!(is_legal_pawn_move(&board, &black, sq(1, 3), sq(3, 3), None));
        assert!(!is_legal_pawn_move(&board, &black, sq(1, 3), sq(0, 3), None));
    }

    #[test]
    fn double_step_needs_start_rank_and_two_empty_squares() {
        let mut board = Board::empty();
        board.place(sq(5, 0), Color::Light, PieceKind::Pawn);
        let off_rank = pawn_at(&board, sq(5, 0));
        assert!(!is_legal_pawn_move(&board, &off_rank, sq(5, 0), sq(3, 0), None));

        board.place(sq(6, 2), Color::Light, PieceKind::Pawn);
        board.place(sq(5, 2), Color::Dark, PieceKind::Knight);
        let blocked_middle = pawn_at(&board, sq(6, 2));
        assert!(!is_legal_pawn_move(&board, &blocked_middle, sq(6, 2), sq(4, 2), None));

        board.place(sq(6, 5), Color::Light, PieceKind::Pawn);
        board.place(sq(4, 5), Color::Dark, PieceKind::Knight);
        let blocked_end = pawn_at(&board, sq(6, 5));
        assert!(!is_legal_pawn_move(&board, &blocked_end, sq(6, 5), sq(4, 5), None));
        assert!(is_legal_pawn_move(&board, &blocked_end, sq(6, 5), sq(5, 5), None));
    }

    #[test]
    fn pawn_captures_only_diagonally_forward_onto_enemies() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Color::Light, PieceKind::Pawn);
        board.place(sq(3, 3), Color::Dark, PieceKind::Pawn);
        board.place(sq(3, 5), Color::Light, PieceKind::Knight);
        board.place(sq(3, 4), Color::Dark, PieceKind::Rook);
        board.place(sq(5, 3), Color::Dark, PieceKind::Rook);
        let pawn = pawn_at(&board, sq(4, 4));

        assert!(is_legal_pawn_move(&board, &pawn, sq(4, 4), sq(3, 3), None));
        assert!(!is_legal_pawn_move(&board, &pawn, sq(4, 4), sq(3, 5), None));
        assert!(!is_legal_pawn_move(&board, &pawn, sq(4, 4), sq(3, 4), None));
        assert!(!is_legal_pawn_move(&board, &pawn, sq(4, 4), sq(5, 3), None));
    }

    #[test]
    fn en_passant_requires_fresh_double_step_beside_the_pawn() {
        // White pawn e5, black pawn just arrived on d5.
        let mut board = Board::empty();
        board.place(sq(3, 4), Color::Light, PieceKind::Pawn);
        board.place(sq(3, 3), Color::Dark, PieceKind::Pawn);
        let pawn = pawn_at(&board, sq(3, 4));

        assert!(is_legal_pawn_move(&board, &pawn, sq(3, 4), sq(2, 3), Some(sq(3, 3))));
        assert!(!is_legal_pawn_move(&board, &pawn, sq(3, 4), sq(2, 3), None));
        assert!(!is_legal_pawn_move(&board, &pawn, sq(3, 4), sq(2, 5), Some(sq(3, 3))));
    }

    #[test]
    fn en_passant_rejects_wrong_rank_and_non_pawn_victims() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Color::Light, PieceKind::Pawn);
        board.place(sq(4, 3), Color::Dark, PieceKind::Pawn);
        let wrong_rank = pawn_at(&board, sq(4, 4));
        assert!(!is_legal_pawn_move(&board, &wrong_rank, sq(4, 4), sq(3, 3), Some(sq(4, 3))));

        let mut board = Board::empty();
        board.place(sq(4, 1), Color::Dark, PieceKind::Pawn);
        board.place(sq(4, 2), Color::Light, PieceKind::Knight);
        let black = pawn_at(&board, sq(4, 1));
        assert!(!is_legal_pawn_move(&board, &black, sq(4, 1), sq(5, 2), Some(sq(4, 2))));

        board.place(sq(4, 2), Color::Light, PieceKind::Pawn);
        assert!(is_legal_pawn_move(&board, &black, sq(4, 1), sq(5, 2), Some(sq(4, 2))));
    }

    #[test]
    fn en_passant_never_lands_on_a_friendly_piece() {
        let mut board = Board::empty();
        board.place(sq(3, 4), Color::Light, PieceKind::Pawn);
        board.place(sq(3, 3), Color::Dark, PieceKind::Pawn);
        board.place(sq(2, 3), Color::Light, PieceKind::Bishop);
        let pawn = pawn_at(&board, sq(3, 4));
        assert!(!is_legal_pawn_move(&board, &pawn, sq(3, 4), sq(2, 3), Some(sq(3, 3))));
    }
}
