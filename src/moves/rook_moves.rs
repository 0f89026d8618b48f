use crate::game_state::chess_types::*;
use crate::moves::line_paths::{destination_is_open, is_straight_line, path_is_clear};

/// Rook: along a row or column through empty squares, onto an empty or enemy square.
pub fn is_legal_rook_move(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    is_straight_line(start, end)
        && path_is_clear(board, start, end)
        && destination_is_open(board, end, piece.color)
}
