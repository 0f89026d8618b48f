//! King legality: one step in any direction, or castling.
//!
//! Castling here checks only the piece conditions (unmoved king and rook,
//! empty squares between them). Whether the king is attacked on its way is
//! a position-level question answered by the session when strict castling
//! is enabled.

use crate::game_state::chess_types::*;
use crate::moves::line_paths::{destination_is_open, path_is_clear};

pub fn is_legal_king_move(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    is_single_step(board, piece, start, end) || is_castling_move(board, piece, start, end)
}

fn is_single_step(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    d_row.abs().max(d_col.abs()) <= 1 && destination_is_open(board, end, piece.color)
}

/// Corner square of the rook that castles with a king moving from `start` to `end`.
pub fn castling_rook_square(start: Square, end: Square) -> Option<Square> {
    let (d_row, d_col) = start.delta_to(end);
    if d_row != 0 || d_col.abs() != 2 {
        return None;
    }
    let rook_col = if d_col > 0 { 7 } else { 0 };
    Square::new(start.row(), rook_col)
}

/// Square the castling rook lands on: next to the king, on the side it came from.
pub fn castled_rook_destination(start: Square, end: Square) -> Option<Square> {
    let (_, d_col) = start.delta_to(end);
    end.offset(0, -d_col.signum())
}

pub fn is_castling_move(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    if piece.has_moved {
        return false;
    }
    let Some(rook_square) = castling_rook_square(start, end) else {
        return false;
    };
    let rook_ready = board.piece_at(rook_square).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == piece.color && !rook.has_moved
    });
    rook_ready && path_is_clear(board, start, rook_square)
}
