//! Move executor.
//!
//! Applies an already-validated move to a board: en-passant removal, castling
//! rook relocation, the move itself, promotion, and the new
//! last-double-pawn-move marker. Legality is the caller's job.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::{castled_rook_destination, castling_rook_square};

/// Everything the executor did, for notation and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub start: Square,
    pub end: Square,
    pub captured: Option<Piece>,
    pub en_passant: bool,
    /// Rook relocation `(from, to)` when the move castled.
    pub castled_rook: Option<(Square, Square)>,
    pub promoted_to: Option<PieceKind>,
    /// Last-double-pawn-move after this move.
    pub last_double: Option<Square>,
}

impl AppliedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// True when a pawn moving to `end` must promote.
#[inline]
pub fn reaches_promotion_row(piece: &Piece, end: Square) -> bool {
    piece.kind == PieceKind::Pawn && end.row() == piece.color.promotion_row()
}

/// Applies the move in place. `promotion` is only used when a pawn reaches
/// the far rank.
///
/// Fails without touching the board when `start` is empty or the promotion
/// choice is not a knight, bishop, rook, or queen.
pub fn execute_move(
    board: &mut Board,
    start: Square,
    end: Square,
    last_double: Option<Square>,
    promotion: PieceKind,
) -> Result<AppliedMove, ChessErrors> {
    let piece = *board.piece_at(start).ok_or(ChessErrors::EmptyOrigin(start))?;
    let promotes = reaches_promotion_row(&piece, end);
    if promotes && !promotion.is_promotion_choice() {
        return Err(ChessErrors::InvalidPromotionChoice(promotion));
    }
    let (d_row, d_col) = start.delta_to(end);

    // En passant: diagonal pawn move onto an empty square in the double-stepped pawn's column.
    let mut captured = None;
    let mut en_passant = false;
    if let Some(victim_square) = last_double {
        if piece.kind == PieceKind::Pawn
            && d_col.abs() == 1
            && board.is_empty(end)
            && victim_square.col() == end.col()
        {
            captured = board.remove(victim_square);
            en_passant = captured.is_some();
        }
    }

    // Castling: drag the corner rook across the king.
    let mut castled_rook = None;
    if piece.kind == PieceKind::King && d_row == 0 && d_col.abs() == 2 {
        if let (Some(rook_from), Some(rook_to)) = (
            castling_rook_square(start, end),
            castled_rook_destination(start, end),
        ) {
            let is_own_rook = board
                .piece_at(rook_from)
                .is_some_and(|rook| rook.kind == PieceKind::Rook && rook.color == piece.color);
            if is_own_rook {
                board.relocate(rook_from, rook_to);
                if let Some(rook) = board.piece_at_mut(rook_to) {
                    rook.has_moved = true;
                }
                castled_rook = Some((rook_from, rook_to));
            }
        }
    }

    if let Some(taken) = board.relocate(start, end) {
        captured = Some(taken);
    }
    if let Some(moved) = board.piece_at_mut(end) {
        moved.has_moved = true;
    }

    let promoted_to = if promotes {
        board.place(end, piece.color, promotion);
        Some(promotion)
    } else {
        None
    };

    let next_last_double = if piece.kind == PieceKind::Pawn && d_row.abs() == 2 {
        Some(end)
    } else {
        None
    };

    Ok(AppliedMove {
        piece,
        start,
        end,
        captured,
        en_passant,
        castled_rook,
        promoted_to,
        last_double: next_last_double,
    })
}

/// Pure variant of `execute_move`: returns the resulting board and leaves
/// the input untouched. Used for hypothetical moves during check detection.
pub fn apply_move_to_board(
    board: &Board,
    start: Square,
    end: Square,
    last_double: Option<Square>,
    promotion: PieceKind,
) -> Result<(Board, AppliedMove), ChessErrors> {
    let mut next = board.clone();
    let applied = execute_move(&mut next, start, end, last_double, promotion)?;
    Ok((next, applied))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_step_sets_last_double_and_single_step_clears_it() {
        let mut board = Board::standard();
        let applied = execute_move(&mut board, sq(6, 4), sq(4, 4), None, PieceKind::Queen)
            .expect("e2e4 applies");
        assert_eq!(applied.last_double, Some(sq(4, 4)));
        assert!(board.is_empty(sq(6, 4)));
        let pawn = board.piece_at(sq(4, 4)).expect("pawn on e4");
        assert!(pawn.has_moved);
        assert_eq!(pawn.position, sq(4, 4));

        let applied = execute_move(&mut board, sq(0, 6), sq(2, 5), Some(sq(4, 4)), PieceKind::Queen)
            .expect("Nf6 applies");
        assert_eq!(applied.last_double, None);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = Board::empty();
        board.place(sq(3, 4), Color::Light, PieceKind::Pawn);
        board.place(sq(3, 3), Color::Dark, PieceKind::Pawn);

        let applied = execute_move(&mut board, sq(3, 4), sq(2, 3), Some(sq(3, 3)), PieceKind::Queen)
            .expect("exd6 applies");
        assert!(applied.en_passant);
        assert_eq!(applied.captured.map(|p| p.kind), Some(PieceKind::Pawn));
        assert!(board.is_empty(sq(3, 3)));
        assert!(board.is_empty(sq(3, 4)));
        assert_eq!(board.tag_at(sq(2, 3)), 'P');
    }

    #[test]
    fn castling_moves_the_rook_and_marks_it() {
        let mut board = Board::empty();
        board.place(sq(7, 4), Color::Light, PieceKind::King);
        board.place(sq(7, 7), Color::Light, PieceKind::Rook);
        board.place(sq(7, 0), Color::Light, PieceKind::Rook);

        let applied = execute_move(&mut board, sq(7, 4), sq(7, 6), None, PieceKind::Queen)
            .expect("O-O applies");
        assert_eq!(applied.castled_rook, Some((sq(7, 7), sq(7, 5))));
        assert_eq!(board.tag_at(sq(7, 6)), 'K');
        assert_eq!(board.tag_at(sq(7, 5)), 'R');
        assert!(board.is_empty(sq(7, 7)));
        assert!(board.piece_at(sq(7, 5)).expect("rook on f1").has_moved);
        assert!(!board.piece_at(sq(7, 0)).expect("rook on a1").has_moved);
    }

    #[test]
    fn queenside_castling_for_black() {
        let mut board = Board::empty();
        board.place(sq(0, 4), Color::Dark, PieceKind::King);
        board.place(sq(0, 0), Color::Dark, PieceKind::Rook);

        let applied = execute_move(&mut board, sq(0, 4), sq(0, 2), None, PieceKind::Queen)
            .expect("O-O-O applies");
        assert_eq!(applied.castled_rook, Some((sq(0, 0), sq(0, 3))));
        assert_eq!(board.tag_at(sq(0, 2)), 'k');
        assert_eq!(board.tag_at(sq(0, 3)), 'r');
    }

    #[test]
    fn promotion_replaces_the_pawn_with_the_chosen_piece() {
        let mut board = Board::empty();
        board.place(sq(1, 0), Color::Light, PieceKind::Pawn);
        board.place(sq(0, 1), Color::Dark, PieceKind::Rook);

        let applied = execute_move(&mut board, sq(1, 0), sq(0, 1), None, PieceKind::Knight)
            .expect("axb8=N applies");
        assert_eq!(applied.promoted_to, Some(PieceKind::Knight));
        assert_eq!(applied.captured.map(|p| p.kind), Some(PieceKind::Rook));
        let knight = board.piece_at(sq(0, 1)).expect("promoted piece");
        assert_eq!(knight.kind, PieceKind::Knight);
        assert_eq!(knight.color, Color::Light);
        assert_eq!(knight.position, sq(0, 1));
        assert!(board.pieces(Color::Light).all(|(_, p)| p.kind != PieceKind::Pawn));
    }

    #[test]
    fn invalid_promotion_choice_leaves_board_untouched() {
        let mut board = Board::empty();
        board.place(sq(6, 7), Color::Dark, PieceKind::Pawn);
        let before = board.clone();

        let err = execute_move(&mut board, sq(6, 7), sq(7, 7), None, PieceKind::King)
            .expect_err("king is not a promotion choice");
        assert_eq!(err, ChessErrors::InvalidPromotionChoice(PieceKind::King));
        assert_eq!(board, before);
    }

    #[test]
    fn pure_apply_does_not_touch_the_input() {
        let board = Board::standard();
        let (after, applied) = apply_move_to_board(&board, sq(7, 6), sq(5, 5), None, PieceKind::Queen)
            .expect("Nf3 applies");
        assert_eq!(board, Board::standard());
        assert_eq!(after.tag_at(sq(5, 5)), 'N');
        assert!(!applied.is_capture());
    }
}
