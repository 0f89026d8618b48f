//! Dispatch from a piece to the legality predicate for its kind.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::is_legal_bishop_move;
use crate::moves::king_moves::is_legal_king_move;
use crate::moves::knight_moves::is_legal_knight_move;
use crate::moves::pawn_moves::is_legal_pawn_move;
use crate::moves::queen_moves::is_legal_queen_move;
use crate::moves::rook_moves::is_legal_rook_move;

impl Piece {
    /// Pure legality predicate for moving this piece from `start` to `end`.
    ///
    /// `last_double` only matters to pawns. Self-check is not considered.
    pub fn is_legal_move(
        &self,
        start: Square,
        end: Square,
        board: &Board,
        last_double: Option<Square>,
    ) -> bool {
        match self.kind {
            PieceKind::Pawn => is_legal_pawn_move(board, self, start, end, last_double),
            PieceKind::Knight => is_legal_knight_move(board, self, start, end),
            PieceKind::Bishop => is_legal_bishop_move(board, self, start, end),
            PieceKind::Rook => is_legal_rook_move(board, self, start, end),
            PieceKind::Queen => is_legal_queen_move(board, self, start, end),
            PieceKind::King => is_legal_king_move(board, self, start, end),
        }
    }
}
