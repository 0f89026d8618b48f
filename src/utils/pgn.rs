//! PGN-style move text and the move-log exporter.
//!
//! Half-moves are written in short algebraic form without check markers.
//! The log holds one line per full move, `"<N>. <white> [<black>]"`.

use std::fs;
use std::io;
use std::path::Path;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::AppliedMove;

/// Short algebraic text for an executed move.
pub fn move_to_pgn(applied: &AppliedMove) -> String {
    let piece = applied.piece;
    let (_, d_col) = applied.start.delta_to(applied.end);

    if piece.kind == PieceKind::King && d_col.abs() == 2 {
        return if d_col > 0 { "O-O" } else { "O-O-O" }.to_owned();
    }

    let destination = applied.end.to_string();
    let mut out = match (piece.kind, applied.is_capture()) {
        (PieceKind::Pawn, true) => {
            let start_file = char::from(b'a' + applied.start.col());
            format!("{start_file}x{destination}")
        }
        (PieceKind::Pawn, false) => destination,
        (kind, true) => format!("{}x{destination}", kind.letter()),
        (kind, false) => format!("{}{destination}", kind.letter()),
    };

    if let Some(promoted) = applied.promoted_to {
        out.push('=');
        out.push(promoted.letter());
    }
    out
}

/// Serializes full-move lines, each terminated by a newline.
pub fn write_move_log(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub fn export_move_log(path: impl AsRef<Path>, lines: &[String]) -> io::Result<()> {
    fs::write(path, write_move_log(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::execute_move;

    fn pgn_for(board: &mut Board, start: Square, end: Square, last_double: Option<Square>) -> String {
        let applied = execute_move(board, start, end, last_double, PieceKind::Queen)
            .expect("test move should apply");
        move_to_pgn(&applied)
    }

    #[test]
    fn quiet_moves_and_captures() {
        let mut board = Board::standard();
        assert_eq!(pgn_for(&mut board, sq(6, 4), sq(4, 4), None), "e4");
        assert_eq!(pgn_for(&mut board, sq(1, 3), sq(3, 3), None), "d5");
        assert_eq!(pgn_for(&mut board, sq(4, 4), sq(3, 3), None), "exd5");
        assert_eq!(pgn_for(&mut board, sq(0, 3), sq(3, 3), None), "Qxd5");
        assert_eq!(pgn_for(&mut board, sq(7, 6), sq(5, 5), None), "Nf3");
    }

    #[test]
    fn castling_and_promotion_notation() {
        let mut board = Board::empty();
        board.place(sq(0, 4), Color::Dark, PieceKind::King);
        board.place(sq(0, 0), Color::Dark, PieceKind::Rook);
        board.place(sq(6, 6), Color::Dark, PieceKind::Pawn);
        assert_eq!(pgn_for(&mut board, sq(0, 4), sq(0, 2), None), "O-O-O");
        assert_eq!(pgn_for(&mut board, sq(6, 6), sq(7, 6), None), "g1=Q");
    }

    #[test]
    fn en_passant_is_written_as_a_pawn_capture() {
        let mut board = Board::empty();
        board.place(sq(4, 1), Color::Dark, PieceKind::Pawn);
        board.place(sq(4, 2), Color::Light, PieceKind::Pawn);
        assert_eq!(pgn_for(&mut board, sq(4, 1), sq(5, 2), Some(sq(4, 2))), "bxc3");
    }

    #[test]
    fn move_log_has_one_line_per_full_move() {
        let lines = vec!["1. e4 e5".to_owned(), "2. Nf3".to_owned()];
        assert_eq!(write_move_log(&lines), "1. e4 e5\n2. Nf3\n");
        assert_eq!(write_move_log(&[]), "");
    }

    #[test]
    fn export_writes_the_log_to_disk() {
        let path = std::env::temp_dir().join(format!("mailbox_chess_pgn_{}.pgn", std::process::id()));
        let lines = vec!["1. e4 e5".to_owned()];
        export_move_log(&path, &lines).expect("export should succeed");
        let written = fs::read_to_string(&path).expect("file should exist");
        let _ = fs::remove_file(&path);
        assert_eq!(written, "1. e4 e5\n");
    }
}
