//! Settings for the interactive console front-end.
//!
//! Values come from `MAILBOX_CHESS_*` environment variables. Anything missing
//! or unparsable keeps its default.

use std::path::PathBuf;

use crate::game_state::chess_rules::RuleOptions;
use crate::game_state::chess_types::Color;

pub const ENV_ENGINE: &str = "MAILBOX_CHESS_ENGINE";
pub const ENV_DELAY_MS: &str = "MAILBOX_CHESS_DELAY_MS";
pub const ENV_SEED: &str = "MAILBOX_CHESS_SEED";
pub const ENV_PGN: &str = "MAILBOX_CHESS_PGN";
pub const ENV_VERBOSE: &str = "MAILBOX_CHESS_VERBOSE";
pub const ENV_STRICT: &str = "MAILBOX_CHESS_STRICT";

pub const DEFAULT_PGN_PATH: &str = "saved_game.pgn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Side played by the greedy engine. `None` means two humans.
    pub engine_color: Option<Color>,
    /// Pause before the engine replies.
    pub think_delay_ms: u64,
    pub engine_seed: Option<u64>,
    /// Where the move log is written when the game ends or on `save`.
    pub pgn_path: PathBuf,
    /// Echo engine info lines and game log entries as they happen.
    pub verbose: bool,
    pub rules: RuleOptions,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            engine_color: Some(Color::Dark),
            think_delay_ms: 0,
            engine_seed: None,
            pgn_path: PathBuf::from(DEFAULT_PGN_PATH),
            verbose: false,
            rules: RuleOptions::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ENGINE) {
            match value.trim().to_ascii_lowercase().as_str() {
                "white" | "light" => config.engine_color = Some(Color::Light),
                "black" | "dark" => config.engine_color = Some(Color::Dark),
                "none" | "off" => config.engine_color = None,
                _ => {}
            }
        }
        if let Some(delay) = lookup(ENV_DELAY_MS).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.think_delay_ms = delay;
        }
        if let Some(seed) = lookup(ENV_SEED).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.engine_seed = Some(seed);
        }
        if let Some(path) = lookup(ENV_PGN) {
            let path = path.trim();
            if !path.is_empty() {
                config.pgn_path = PathBuf::from(path);
            }
        }
        if let Some(flag) = lookup(ENV_VERBOSE).as_deref().and_then(parse_flag) {
            config.verbose = flag;
        }
        if let Some(flag) = lookup(ENV_STRICT).as_deref().and_then(parse_flag) {
            config.rules = if flag {
                RuleOptions::strict()
            } else {
                RuleOptions::default()
            };
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
