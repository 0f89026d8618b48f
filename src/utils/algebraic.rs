//! Square conversions for algebraic coordinates.
//!
//! `"a8"` is row 0, column 0 and `"h1"` is row 7, column 7.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e2") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let invalid = || ChessErrors::InvalidAlgebraicString(square.to_owned());
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Square::new(b'8' - rank, file - b'a').ok_or_else(invalid)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
