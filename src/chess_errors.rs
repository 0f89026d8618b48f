//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by session operations,
//! parsing utilities, and engines. Every variant describes a recoverable
//! rejection: an operation that returns `Err` leaves the game untouched, so
//! callers can report the message and ask for new input.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, GameStatus, PieceKind, Square};

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A coordinate string such as `"e9"` could not be parsed.
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// A FEN string had malformed structure or tokens.
    ///
    /// Payload: a description of the offending field.
    InvalidFenString(String),

    /// No piece stands on the requested start square.
    EmptyOrigin(Square),

    /// The piece on the start square belongs to the side not on move.
    WrongTurn { expected: Color },

    /// The piece's legality predicate rejected the move.
    IllegalMove { start: Square, end: Square },

    /// The move would leave the mover's own king attacked. Only produced
    /// when `RuleOptions::reject_self_check` is enabled.
    LeavesKingInCheck { start: Square, end: Square },

    /// Pawns can only promote to a knight, bishop, rook, or queen.
    InvalidPromotionChoice(PieceKind),

    /// The game already reached checkmate or stalemate.
    GameAlreadyOver(GameStatus),

    /// The side to move has no candidate move at all.
    NoLegalMoves(Color),

    /// The undo stack is empty.
    NothingToUndo,

    /// The redo stack is empty.
    NothingToRedo,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicString(input) => {
                write!(f, "invalid square '{input}', expected something like 'e2'")
            }
            ChessErrors::InvalidFenString(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::EmptyOrigin(square) => write!(f, "no piece at {square}"),
            ChessErrors::WrongTurn { expected } => write!(f, "it's {expected}'s turn"),
            ChessErrors::IllegalMove { start, end } => {
                write!(f, "illegal move {start} -> {end}")
            }
            ChessErrors::LeavesKingInCheck { start, end } => {
                write!(f, "move {start} -> {end} leaves the king in check")
            }
            ChessErrors::InvalidPromotionChoice(kind) => {
                write!(f, "cannot promote to {kind:?}")
            }
            ChessErrors::GameAlreadyOver(status) => write!(f, "game is over: {status}"),
            ChessErrors::NoLegalMoves(color) => write!(f, "{color} has no legal moves"),
            ChessErrors::NothingToUndo => f.write_str("nothing to undo"),
            ChessErrors::NothingToRedo => f.write_str("nothing to redo"),
        }
    }
}

impl Error for ChessErrors {}
