//! Engine abstraction for automated opponents.
//!
//! Engines inspect a session read-only and propose a move; the session
//! applies it through the normal move path.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameSession;
use crate::move_generation::legal_move_generator::CandidateMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no candidate move.
    pub best_move: Option<CandidateMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn choose_move(&mut self, session: &GameSession) -> Result<EngineOutput, ChessErrors>;
}
