//! Game-state evaluation: check, checkmate, and stalemate.
//!
//! Check detection asks every enemy piece's predicate whether it could move
//! onto the king's square. Escape detection tries each candidate move on a
//! copy of the board, so the caller's board is never modified.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_generator::generate_candidate_moves;

/// True when some piece of the other color could capture `color`'s king.
///
/// A board without a king of `color` is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_square) = board.king_square(color) else {
        return false;
    };
    board
        .pieces(color.opposite())
        .any(|(start, piece)| piece.is_legal_move(start, king_square, board, None))
}

/// True when a piece of `attacker` controls `target`, whether or not it is occupied.
///
/// Pawns attack diagonally only and kings attack their eight neighbours;
/// the other pieces use their movement predicate.
pub fn is_square_attacked(board: &Board, target: Square, attacker: Color) -> bool {
    board.pieces(attacker).any(|(start, piece)| {
        let (d_row, d_col) = start.delta_to(target);
        match piece.kind {
            PieceKind::Pawn => d_row == attacker.pawn_direction() && d_col.abs() == 1,
            PieceKind::King => start != target && d_row.abs() <= 1 && d_col.abs() <= 1,
            _ => {
                let mut probe = board.clone();
                // Clear the target so the same-color destination rule cannot hide control.
                probe.remove(target);
                piece.is_legal_move(start, target, &probe, None)
            }
        }
    })
}

/// Plays `start -> end` on a copy and reports whether the mover's king is safe afterwards.
pub fn leaves_king_safe(
    board: &Board,
    start: Square,
    end: Square,
    last_double: Option<Square>,
) -> bool {
    let Some(color) = board.piece_at(start).map(|piece| piece.color) else {
        return false;
    };
    match apply_move_to_board(board, start, end, last_double, PieceKind::Queen) {
        Ok((after, _)) => !is_in_check(&after, color),
        Err(_) => false,
    }
}

/// True when no candidate move of `color` leaves its king out of check.
pub fn has_no_legal_moves(board: &Board, color: Color, last_double: Option<Square>) -> bool {
    !generate_candidate_moves(board, color, last_double)
        .iter()
        .any(|mv| leaves_king_safe(board, mv.start, mv.end, last_double))
}

/// Evaluates the position for the opponent of `mover` right after `mover` moved.
pub fn check_game_state(board: &Board, mover: Color, last_double: Option<Square>) -> GameStatus {
    let opponent = mover.opposite();
    let in_check = is_in_check(board, opponent);
    let stuck = has_no_legal_moves(board, opponent, last_double);

    match (in_check, stuck) {
        (true, true) => GameStatus::Checkmate { winner: mover },
        (true, false) => GameStatus::Check(opponent),
        (false, true) => GameStatus::Stalemate,
        (false, false) => GameStatus::Ongoing,
    }
}
