//! Full-state snapshots backing undo and redo.
//!
//! A snapshot owns its own copy of the board, so restoring one never aliases
//! pieces held by the live game or by any other snapshot.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: Color,
    pub last_double_pawn_move: Option<Square>,
    pub move_history: Vec<String>,
    pub move_count: u16,
    pub status: GameStatus,
}

/// Undo and redo stacks. Recording a new state invalidates the redo stack.
#[derive(Debug, Clone, Default)]
pub struct HistoryStacks {
    undo: Vec<GameSnapshot>,
    redo: Vec<GameSnapshot>,
}

impl HistoryStacks {
    /// Pushes the state from before a fresh move and drops any redo entries.
    pub fn record(&mut self, snapshot: GameSnapshot) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Swaps `current` for the most recent undo entry, parking `current` on the redo stack.
    pub fn step_back(&mut self, current: GameSnapshot) -> Option<GameSnapshot> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Mirror of `step_back`.
    pub fn step_forward(&mut self, current: GameSnapshot) -> Option<GameSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
