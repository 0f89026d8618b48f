//! Terminal board renderer.
//!
//! Draws the board from Light's side with file letters and rank numbers,
//! using the board's one-character occupant tags.

use crate::game_state::chess_types::*;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("    a b c d e f g h\n");
    out.push_str("  -----------------\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push_str(" | ");
        for col in 0..8u8 {
            out.push(board.tag_at(sq(row, col)));
            out.push(' ');
        }
        out.push_str("| ");
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  -----------------\n");
    out.push_str("    a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::chess_types::*;

    #[test]
    fn renders_starting_position_ranks() {
        let text = render_board(&Board::standard());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[2], "8 | r n b q k b n r | 8");
        assert_eq!(lines[5], "5 | . . . . . . . . | 5");
        assert_eq!(lines[9], "1 | R N B Q K B N R | 1");
    }
}
