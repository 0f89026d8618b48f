//! Game session: board, side to move, move log, and undo/redo history.
//!
//! `GameSession` is the single owner of all mutable game state. Every
//! operation that can be rejected validates first and mutates only after all
//! checks pass, so an `Err` always leaves the session exactly as it was.

use std::io;
use std::path::Path;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_rules::RuleOptions;
use crate::game_state::chess_types::*;
use crate::game_state::snapshot::{GameSnapshot, HistoryStacks};
use crate::move_generation::legal_move_apply::{
    execute_move, reaches_promotion_row, AppliedMove,
};
use crate::move_generation::legal_move_checks::{
    check_game_state, is_in_check, is_square_attacked, leaves_king_safe,
};
use crate::moves::king_moves::is_castling_move;
use crate::utils::fen_parser::parse_fen;
use crate::utils::pgn::{export_move_log, move_to_pgn, write_move_log};

/// Result of a completed half-move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub applied: AppliedMove,
    pub pgn: String,
    /// Position status for the side that is now to move.
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Color,
    last_double_pawn_move: Option<Square>,
    move_history: Vec<String>,
    move_count: u16,
    status: GameStatus,
    rules: RuleOptions,
    history: HistoryStacks,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Standard starting position, Light to move.
    pub fn new() -> Self {
        Self::from_position(Board::standard(), Color::Light, None, 1)
    }

    pub fn with_rules(rules: RuleOptions) -> Self {
        let mut session = Self::new();
        session.rules = rules;
        session
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    /// Builds a session from an arbitrary position with empty history.
    pub fn from_position(
        board: Board,
        turn: Color,
        last_double_pawn_move: Option<Square>,
        move_count: u16,
    ) -> Self {
        Self {
            board,
            turn,
            last_double_pawn_move,
            move_history: Vec::new(),
            move_count: move_count.max(1),
            status: GameStatus::Ongoing,
            rules: RuleOptions::default(),
            history: HistoryStacks::default(),
        }
    }

    pub fn set_rules(&mut self, rules: RuleOptions) {
        self.rules = rules;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn last_double_pawn_move(&self) -> Option<Square> {
        self.last_double_pawn_move
    }

    /// Full-move lines such as `"1. e4 e5"`.
    #[inline]
    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    /// Number of the full move currently being played.
    #[inline]
    pub fn move_count(&self) -> u16 {
        self.move_count
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn rules(&self) -> RuleOptions {
        self.rules
    }

    pub fn can_undo(&self) -> bool {
        self.history.undo_depth() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history.redo_depth() > 0
    }

    /// Checks that `start -> end` may be played now, without changing anything.
    pub fn validate_move(&self, start: Square, end: Square) -> Result<Piece, ChessErrors> {
        if self.status.is_terminal() {
            return Err(ChessErrors::GameAlreadyOver(self.status));
        }
        let piece = *self
            .board
            .piece_at(start)
            .ok_or(ChessErrors::EmptyOrigin(start))?;
        if piece.color != self.turn {
            return Err(ChessErrors::WrongTurn {
                expected: self.turn,
            });
        }
        if !piece.is_legal_move(start, end, &self.board, self.last_double_pawn_move) {
            return Err(ChessErrors::IllegalMove { start, end });
        }
        if self.rules.strict_castling
            && piece.kind == PieceKind::King
            && is_castling_move(&self.board, &piece, start, end)
            && !self.castling_path_is_safe(start, end, piece.color)
        {
            return Err(ChessErrors::IllegalMove { start, end });
        }
        if self.rules.reject_self_check
            && !leaves_king_safe(&self.board, start, end, self.last_double_pawn_move)
        {
            return Err(ChessErrors::LeavesKingInCheck { start, end });
        }
        Ok(piece)
    }

    fn castling_path_is_safe(&self, start: Square, end: Square, color: Color) -> bool {
        if is_in_check(&self.board, color) {
            return false;
        }
        let (_, d_col) = start.delta_to(end);
        let passes = start.offset(0, d_col.signum());
        [passes, Some(end)]
            .into_iter()
            .flatten()
            .all(|square| !is_square_attacked(&self.board, square, color.opposite()))
    }

    /// Plays one half-move. `promotion` defaults to a queen and is only
    /// checked and used when a pawn reaches the far rank.
    pub fn make_move(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveReport, ChessErrors> {
        let piece = self.validate_move(start, end)?;
        let promotion = promotion.unwrap_or(PieceKind::Queen);
        if reaches_promotion_row(&piece, end) && !promotion.is_promotion_choice() {
            return Err(ChessErrors::InvalidPromotionChoice(promotion));
        }

        let before = self.snapshot();
        let applied = match execute_move(
            &mut self.board,
            start,
            end,
            self.last_double_pawn_move,
            promotion,
        ) {
            Ok(applied) => applied,
            Err(err) => {
                self.restore(before);
                return Err(err);
            }
        };
        self.history.record(before);

        self.last_double_pawn_move = applied.last_double;
        let pgn = move_to_pgn(&applied);
        self.record_pgn(&pgn);
        self.status = check_game_state(&self.board, self.turn, self.last_double_pawn_move);
        self.turn = self.turn.opposite();

        Ok(MoveReport {
            applied,
            pgn,
            status: self.status,
        })
    }

    /// Lets `engine` pick a move for the side to move and plays it.
    ///
    /// Returns `NoLegalMoves` without changing the session when the engine
    /// finds nothing to play.
    pub fn play_engine_move(
        &mut self,
        engine: &mut dyn Engine,
    ) -> Result<(MoveReport, EngineOutput), ChessErrors> {
        if self.status.is_terminal() {
            return Err(ChessErrors::GameAlreadyOver(self.status));
        }
        let output = engine.choose_move(self)?;
        let Some(chosen) = output.best_move else {
            return Err(ChessErrors::NoLegalMoves(self.turn));
        };
        let report = self.make_move(chosen.start, chosen.end, Some(PieceKind::Queen))?;
        Ok((report, output))
    }

    fn record_pgn(&mut self, pgn: &str) {
        match self.turn {
            Color::Light => self.move_history.push(format!("{}. {pgn}", self.move_count)),
            Color::Dark => {
                match self.move_history.last_mut() {
                    Some(line) => {
                        line.push(' ');
                        line.push_str(pgn);
                    }
                    // Game loaded with Dark to move.
                    None => self.move_history.push(format!("{}... {pgn}", self.move_count)),
                }
                self.move_count = self.move_count.saturating_add(1);
            }
        }
    }

    /// Deep copy of the state undo/redo operate on.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            last_double_pawn_move: self.last_double_pawn_move,
            move_history: self.move_history.clone(),
            move_count: self.move_count,
            status: self.status,
        }
    }

    fn restore(&mut self, snapshot: GameSnapshot) {
        self.board = snapshot.board;
        self.turn = snapshot.turn;
        self.last_double_pawn_move = snapshot.last_double_pawn_move;
        self.move_history = snapshot.move_history;
        self.move_count = snapshot.move_count;
        self.status = snapshot.status;
    }

    /// Pushes the current state onto the undo stack and clears redo.
    pub fn save_state(&mut self) {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
    }

    pub fn undo(&mut self) -> Result<(), ChessErrors> {
        let current = self.snapshot();
        let previous = self
            .history
            .step_back(current)
            .ok_or(ChessErrors::NothingToUndo)?;
        self.restore(previous);
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), ChessErrors> {
        let current = self.snapshot();
        let next = self
            .history
            .step_forward(current)
            .ok_or(ChessErrors::NothingToRedo)?;
        self.restore(next);
        Ok(())
    }

    /// Move log text, one full move per line.
    pub fn move_log_text(&self) -> String {
        write_move_log(&self.move_history)
    }

    pub fn export_move_log(&self, path: impl AsRef<Path>) -> io::Result<()> {
        export_move_log(path, &self.move_history)
    }
}
