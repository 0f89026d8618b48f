use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::is_legal_bishop_move;
use crate::moves::rook_moves::is_legal_rook_move;

/// Queen: any move a rook or a bishop could make from the same square.
#[inline]
pub fn is_legal_queen_move(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    is_legal_rook_move(board, piece, start, end) || is_legal_bishop_move(board, piece, start, end)
}
