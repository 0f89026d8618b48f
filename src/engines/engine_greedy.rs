//! Capture-maximizing opponent.
//!
//! Scans every candidate move for the side to move. The capture of the most
//! valuable enemy piece wins, ties going to the first one found in scan
//! order; with no capture available a candidate is drawn uniformly at random.
//! The engine does not look at whether its move leaves its own king in check
//! unless the session's rules reject such moves.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameSession;
use crate::move_generation::legal_move_generator::{
    generate_candidate_moves, generate_legal_moves, CandidateMove,
};

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic fallback choices, for tests and reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1000,
        }
    }

    /// First candidate capturing the highest-valued enemy piece.
    pub fn best_capture(candidates: &[CandidateMove]) -> Option<(CandidateMove, i32)> {
        let mut best: Option<(CandidateMove, i32)> = None;
        for mv in candidates {
            let Some(target) = mv.captured.filter(|t| t.color != mv.piece.color) else {
                continue;
            };
            let value = Self::piece_value(target.kind);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((*mv, value));
            }
        }
        best
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy Capture"
    }

    fn choose_move(&mut self, session: &GameSession) -> Result<EngineOutput, ChessErrors> {
        if session.status().is_terminal() {
            return Err(ChessErrors::GameAlreadyOver(session.status()));
        }
        let color = session.turn();
        let candidates = if session.rules().reject_self_check {
            generate_legal_moves(session.board(), color, session.last_double_pawn_move())
        } else {
            generate_candidate_moves(session.board(), color, session.last_double_pawn_move())
        };

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine color {} candidates {}",
            color,
            candidates.len()
        ));

        if candidates.is_empty() {
            out.info_lines
                .push("info string greedy_engine no legal moves".to_owned());
            return Ok(out);
        }

        let picked = match Self::best_capture(&candidates) {
            Some((mv, value)) => {
                out.info_lines.push(format!(
                    "info string greedy_engine capture {} -> {} value {}",
                    mv.start, mv.end, value
                ));
                mv
            }
            None => {
                let mv = *candidates
                    .as_slice()
                    .choose(&mut self.rng)
                    .ok_or(ChessErrors::NoLegalMoves(color))?;
                out.info_lines.push(format!(
                    "info string greedy_engine random {} -> {}",
                    mv.start, mv.end
                ));
                mv
            }
        };

        out.best_move = Some(picked);
        Ok(out)
    }
}
