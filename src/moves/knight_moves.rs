use crate::game_state::chess_types::*;
use crate::moves::line_paths::destination_is_open;

/// The eight L-shaped `(row, col)` jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Knight: one of the fixed jumps, onto an empty or enemy square. Never blocked.
pub fn is_legal_knight_move(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    KNIGHT_OFFSETS.contains(&start.delta_to(end)) && destination_is_open(board, end, piece.color)
}
