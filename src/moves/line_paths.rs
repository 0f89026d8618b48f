//! Geometry helpers shared by the sliding pieces and the king.

use crate::game_state::chess_types::*;

/// Same row or same column, excluding the null move.
#[inline]
pub fn is_straight_line(start: Square, end: Square) -> bool {
    start != end && (start.row() == end.row() || start.col() == end.col())
}

/// Equal absolute row and column deltas, excluding the null move.
#[inline]
pub fn is_diagonal_line(start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    d_row != 0 && d_row.abs() == d_col.abs()
}

/// Every square strictly between `start` and `end` is empty.
///
/// Callers must pass squares on a shared straight or diagonal line.
pub fn path_is_clear(board: &Board, start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    let step = (d_row.signum(), d_col.signum());
    let mut current = start.offset(step.0, step.1);

    while let Some(square) = current {
        if square == end {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step.0, step.1);
    }

    // Ran off the board without meeting `end`: the squares were not aligned.
    false
}

/// The destination is empty or holds an enemy of `color`.
#[inline]
pub fn destination_is_open(board: &Board, end: Square, color: Color) -> bool {
    !board.has_color(end, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_ignores_endpoints_but_sees_blockers() {
        let mut board = Board::empty();
        board.place(sq(7, 0), Color::Light, PieceKind::Rook);
        board.place(sq(7, 7), Color::Dark, PieceKind::Rook);
        assert!(path_is_clear(&board, sq(7, 0), sq(7, 7)));

        board.place(sq(7, 3), Color::Dark, PieceKind::Pawn);
        assert!(!path_is_clear(&board, sq(7, 0), sq(7, 7)));
        assert!(path_is_clear(&board, sq(7, 0), sq(7, 3)));
    }

    #[test]
    fn diagonal_and_straight_classification() {
        assert!(is_diagonal_line(sq(7, 2), sq(2, 7)));
        assert!(!is_diagonal_line(sq(7, 2), sq(2, 6)));
        assert!(!is_diagonal_line(sq(4, 4), sq(4, 4)));
        assert!(is_straight_line(sq(4, 4), sq(0, 4)));
        assert!(!is_straight_line(sq(4, 4), sq(4, 4)));
    }
}
