//! Timestamped game event log.
//!
//! Front-ends record notable events (moves, checks, undo/redo, exports,
//! engine diagnostics) here; the library itself never prints.

use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub scope: &'static str,
    pub message: String,
}

impl LogEntry {
    pub fn render(&self) -> String {
        format!("[{}] [{}] {}", self.at.format("%H:%M:%S"), self.scope, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct GameLog {
    started: DateTime<Local>,
    entries: Vec<LogEntry>,
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLog {
    pub fn new() -> Self {
        Self {
            started: Local::now(),
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, scope: &'static str, message: impl Into<String>) {
        self.entries.push(LogEntry {
            at: Local::now(),
            scope,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries recorded after the first `seen` ones.
    pub fn entries_since(&self, seen: usize) -> &[LogEntry] {
        self.entries.get(seen..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "=== Game log started {} ===\n",
            self.started.format("%m/%d/%Y %H:%M:%S")
        );
        for entry in &self.entries {
            out.push_str(&entry.render());
            out.push('\n');
        }
        out
    }
}
