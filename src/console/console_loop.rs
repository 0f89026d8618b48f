//! Interactive console front-end and command loop.
//!
//! Reads one command per line, routes moves to the session, lets the greedy
//! engine answer for its side, and writes the board and results to the output.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::chess_errors::ChessErrors;
use crate::console::console_config::ConsoleConfig;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameSession, MoveReport};
use crate::move_generation::legal_move_generator::{
    generate_candidate_moves, generate_legal_moves,
};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::game_log::GameLog;
use crate::utils::render_game_state::render_board;

const HELP_TEXT: &str = "\
Commands:
  <from> <to> [q|r|b|n]   move a piece, e.g. 'e2 e4' or 'e7 e8 n'
  <from><to>[q|r|b|n]     same move in one token, e.g. 'e2e4'
  undo | redo             step back or forward through the game
  board                   print the board
  moves                   list moves for the side to move
  save [path]             write the move log
  log                     print the game log
  help                    show this text
  quit                    leave the game";

pub fn run_stdio_loop(config: ConsoleConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(config);

    if console.start(&mut stdout)? {
        return Ok(());
    }
    console.prompt(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        if should_quit {
            stdout.flush()?;
            break;
        }
        console.prompt(&mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}

/// Parses `"e2 e4"`, `"e2 e4 q"`, `"e2e4"` or `"e7e8n"`.
pub fn parse_move_input(input: &str) -> Result<(Square, Square, Option<PieceKind>), ChessErrors> {
    let invalid = || ChessErrors::InvalidAlgebraicString(input.trim().to_owned());
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let (from, to, promo) = match tokens.as_slice() {
        [joined] if joined.len() == 4 || joined.len() == 5 => {
            if !joined.is_ascii() {
                return Err(invalid());
            }
            (&joined[0..2], &joined[2..4], joined.get(4..).filter(|s| !s.is_empty()))
        }
        [from, to] => (*from, *to, None),
        [from, to, promo] => (*from, *to, Some(*promo)),
        _ => return Err(invalid()),
    };

    let promotion = match promo {
        None => None,
        Some(text) => {
            let mut chars = text.chars();
            match (chars.next().and_then(PieceKind::from_letter), chars.next()) {
                (Some(kind), None) if kind.is_promotion_choice() => Some(kind),
                (Some(kind), None) => return Err(ChessErrors::InvalidPromotionChoice(kind)),
                _ => return Err(invalid()),
            }
        }
    };

    Ok((algebraic_to_square(from)?, algebraic_to_square(to)?, promotion))
}

struct ConsoleState {
    session: GameSession,
    engine: Box<dyn Engine>,
    config: ConsoleConfig,
    log: GameLog,
    printed_log: usize,
}

impl ConsoleState {
    fn new(config: ConsoleConfig) -> Self {
        let engine: Box<dyn Engine> = match config.engine_seed {
            Some(seed) => Box::new(GreedyEngine::seeded(seed)),
            None => Box::new(GreedyEngine::new()),
        };
        let mut log = GameLog::new();
        log.record(
            "game",
            match config.engine_color {
                Some(color) => format!("new game, {} plays {}", engine.name(), color),
                None => "new game, two players".to_owned(),
            },
        );
        Self {
            session: GameSession::with_rules(config.rules),
            engine,
            config,
            log,
            printed_log: 0,
        }
    }

    /// Prints the opening board and lets the engine open if it plays White.
    fn start(&mut self, out: &mut impl Write) -> io::Result<bool> {
        writeln!(out, "Mailbox Chess. Type 'help' for commands.")?;
        writeln!(out, "{}", render_board(self.session.board()))?;
        let finished = self.engine_reply(out)?;
        self.flush_log(out)?;
        Ok(finished)
    }

    fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}'s move: ", self.session.turn())
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default().to_ascii_lowercase();

        let quit = match cmd.as_str() {
            "quit" | "exit" => return Ok(true),
            "help" => {
                writeln!(out, "{HELP_TEXT}")?;
                false
            }
            "board" => {
                writeln!(out, "{}", render_board(self.session.board()))?;
                false
            }
            "moves" => {
                self.list_moves(out)?;
                false
            }
            "log" => {
                write!(out, "{}", self.log.render())?;
                self.printed_log = self.log.len();
                false
            }
            "save" => {
                let path = parts
                    .next()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| self.config.pgn_path.clone());
                match self.session.export_move_log(&path) {
                    Ok(()) => {
                        writeln!(out, "Game saved as {}", path.display())?;
                        self.log.record("game", format!("saved move log to {}", path.display()));
                    }
                    Err(err) => writeln!(out, "Could not save {}: {err}", path.display())?,
                }
                false
            }
            "undo" => {
                self.step_history(out, true)?;
                false
            }
            "redo" => {
                self.step_history(out, false)?;
                false
            }
            _ => self.human_move(trimmed, out)?,
        };

        self.flush_log(out)?;
        Ok(quit)
    }

    fn human_move(&mut self, input: &str, out: &mut impl Write) -> io::Result<bool> {
        if self.config.engine_color == Some(self.session.turn()) {
            writeln!(out, "It's the engine's turn.")?;
            return Ok(false);
        }
        let (start, end, promotion) = match parse_move_input(input) {
            Ok(parsed) => parsed,
            Err(err) => {
                writeln!(out, "Invalid input: {err}. Type 'help' for commands.")?;
                return Ok(false);
            }
        };

        let mover = self.session.turn();
        match self.session.make_move(start, end, promotion) {
            Ok(report) => {
                self.report_move(mover, &report, out)?;
                if report.status.is_terminal() {
                    return self.finish_game(out);
                }
                self.engine_reply(out)
            }
            Err(err) => {
                writeln!(out, "Invalid move! {err}")?;
                Ok(false)
            }
        }
    }

    /// Plays the engine's move when it is the engine's turn. Returns true once
    /// the game is over.
    fn engine_reply(&mut self, out: &mut impl Write) -> io::Result<bool> {
        if self.config.engine_color != Some(self.session.turn())
            || self.session.status().is_terminal()
        {
            return Ok(false);
        }

        writeln!(out, "Engine is thinking...")?;
        if self.config.think_delay_ms > 0 {
            out.flush()?;
            thread::sleep(Duration::from_millis(self.config.think_delay_ms));
        }

        let mover = self.session.turn();
        match self.session.play_engine_move(self.engine.as_mut()) {
            Ok((report, output)) => {
                for line in output.info_lines {
                    self.log.record("engine", line);
                }
                self.report_move(mover, &report, out)?;
                if report.status.is_terminal() {
                    return self.finish_game(out);
                }
                Ok(false)
            }
            Err(ChessErrors::NoLegalMoves(_)) => {
                writeln!(out, "Engine has no legal moves.")?;
                self.log.record("engine", "no legal moves");
                self.finish_game(out)
            }
            Err(err) => {
                writeln!(out, "Engine error: {err}")?;
                self.log.record("engine", format!("error: {err}"));
                Ok(false)
            }
        }
    }

    fn report_move(
        &mut self,
        mover: Color,
        report: &MoveReport,
        out: &mut impl Write,
    ) -> io::Result<()> {
        writeln!(out, "{mover} plays {}", report.pgn)?;
        self.log.record(
            "game",
            format!(
                "{mover} {} -> {} ({})",
                report.applied.start, report.applied.end, report.pgn
            ),
        );
        if let Some(kind) = report.applied.promoted_to {
            writeln!(out, "Pawn promoted to {kind:?}!")?;
        }
        writeln!(out, "{}", render_board(self.session.board()))?;
        if report.status != GameStatus::Ongoing {
            writeln!(out, "{}", report.status)?;
            self.log.record("game", report.status.to_string());
        }
        Ok(())
    }

    /// Undo and redo skip over the engine's half-move so the human gets
    /// their own turn back.
    fn step_history(&mut self, out: &mut impl Write, back: bool) -> io::Result<()> {
        let step = |session: &mut GameSession| {
            if back {
                session.undo()
            } else {
                session.redo()
            }
        };

        if let Err(err) = step(&mut self.session) {
            writeln!(out, "{}", capitalize(&err.to_string()))?;
            return Ok(());
        }
        let more = if back {
            self.session.can_undo()
        } else {
            self.session.can_redo()
        };
        if more && self.config.engine_color == Some(self.session.turn()) {
            step(&mut self.session).ok();
        }

        let verb = if back { "undone" } else { "redone" };
        writeln!(out, "Move {verb}.")?;
        self.log.record("game", format!("move {verb}"));
        writeln!(out, "{}", render_board(self.session.board()))?;
        Ok(())
    }

    fn list_moves(&self, out: &mut impl Write) -> io::Result<()> {
        let board = self.session.board();
        let color = self.session.turn();
        let last_double = self.session.last_double_pawn_move();
        let moves = if self.session.rules().reject_self_check {
            generate_legal_moves(board, color, last_double)
        } else {
            generate_candidate_moves(board, color, last_double)
        };
        let listed: Vec<String> = moves
            .iter()
            .map(|mv| format!("{}{}", mv.start, mv.end))
            .collect();
        writeln!(out, "{} moves ({}): {}", color, listed.len(), listed.join(" "))
    }

    fn finish_game(&mut self, out: &mut impl Write) -> io::Result<bool> {
        writeln!(out)?;
        writeln!(out, "Game Over. PGN Moves:")?;
        write!(out, "{}", self.session.move_log_text())?;
        match self.session.export_move_log(&self.config.pgn_path) {
            Ok(()) => {
                writeln!(out, "Game saved as {}", self.config.pgn_path.display())?;
                self.log.record(
                    "game",
                    format!("saved move log to {}", self.config.pgn_path.display()),
                );
            }
            Err(err) => writeln!(
                out,
                "Could not save {}: {err}",
                self.config.pgn_path.display()
            )?,
        }
        Ok(true)
    }

    /// Echoes log entries recorded since the last flush when verbose.
    fn flush_log(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.config.verbose {
            for entry in self.log.entries_since(self.printed_log) {
                writeln!(out, "{}", entry.render())?;
            }
        }
        self.printed_log = self.log.len();
        Ok(())
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
