//! Candidate move enumeration.
//!
//! A candidate is any (origin, destination) pair whose piece predicate holds.
//! Candidates are produced in row-major scan order of the origin and then of
//! the destination, which is the tie-break order engines rely on.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::leaves_king_safe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub start: Square,
    pub end: Square,
    pub piece: Piece,
    /// Occupant of the destination square. En-passant victims are not listed.
    pub captured: Option<Piece>,
}

pub fn generate_candidate_moves(
    board: &Board,
    color: Color,
    last_double: Option<Square>,
) -> Vec<CandidateMove> {
    let mut moves = Vec::new();
    for (start, piece) in board.pieces(color) {
        for end in Square::all() {
            if piece.is_legal_move(start, end, board, last_double) {
                moves.push(CandidateMove {
                    start,
                    end,
                    piece: *piece,
                    captured: board.piece_at(end).copied(),
                });
            }
        }
    }
    moves
}

/// Candidates that also keep the mover's king out of check.
pub fn generate_legal_moves(
    board: &Board,
    color: Color,
    last_double: Option<Square>,
) -> Vec<CandidateMove> {
    generate_candidate_moves(board, color, last_double)
        .into_iter()
        .filter(|mv| leaves_king_safe(board, mv.start, mv.end, last_double))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_twenty_candidates_in_scan_order() {
        let board = Board::standard();
        let moves = generate_candidate_moves(&board, Color::Light, None);
        assert_eq!(moves.len(), 20);
        // a2 pawn is the first origin scanned on rank 2, knights sit on rank 1.
        assert_eq!((moves[0].start, moves[0].end), (sq(6, 0), sq(4, 0)));
        assert_eq!(moves.last().map(|m| m.start), Some(sq(7, 6)));
        assert!(moves.iter().all(|m| m.captured.is_none()));
    }

    #[test]
    fn legal_moves_drop_self_check() {
        // Pinned rook on e2 may only slide along the e-file.
        let mut board = Board::empty();
        board.place(sq(7, 4), Color::Light, PieceKind::King);
        board.place(sq(6, 4), Color::Light, PieceKind::Rook);
        board.place(sq(0, 4), Color::Dark, PieceKind::Rook);
        board.place(sq(0, 0), Color::Dark, PieceKind::King);

        let candidates = generate_candidate_moves(&board, Color::Light, None);
        let legal = generate_legal_moves(&board, Color::Light, None);
        assert!(candidates.iter().any(|m| m.start == sq(6, 4) && m.end == sq(6, 0)));
        assert!(legal
            .iter()
            .filter(|m| m.start == sq(6, 4))
            .all(|m| m.end.col() == 4));
        assert!(legal.iter().any(|m| m.start == sq(6, 4) && m.end == sq(0, 4)));
    }
}
