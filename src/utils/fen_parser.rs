//! FEN-to-GameSession parser.
//!
//! The board field places pieces; castling availability and the en-passant
//! target are folded into the pieces' `has_moved` flags and the session's
//! last-double-pawn-move. Halfmove and fullmove fields are optional.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameSession;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameSession, ChessErrors> {
    let invalid = |msg: String| ChessErrors::InvalidFenString(msg);
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout".to_owned()))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| invalid("missing castling rights".to_owned()))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| invalid("missing en-passant square".to_owned()))?;
    let _halfmove_part = parts.next();
    let fullmove = match parts.next() {
        Some(text) => text
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid fullmove number: {text}")))?,
        None => 1,
    };
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields".to_owned()));
    }

    let mut board = parse_board(board_part)?;
    let turn = parse_side_to_move(side_part)?;
    apply_castling_rights(castling_part, &mut board)?;
    let last_double = parse_en_passant_square(en_passant_part, &board, turn)?;

    Ok(GameSession::from_position(board, turn, last_double, fullmove))
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenString(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;
        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenString(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col = col.saturating_add(empty_count as u8);
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidFenString(format!("invalid piece character '{ch}'"))
            })?;
            let square = Square::new(row as u8, col).ok_or_else(|| {
                ChessErrors::InvalidFenString(format!("rank {} has too many files", 8 - row))
            })?;
            board.place(square, color, kind);
            if let Some(piece) = board.piece_at_mut(square) {
                // Castling rights re-enable kings and rooks below.
                piece.has_moved = match kind {
                    PieceKind::Pawn => square.row() != color.pawn_start_row(),
                    PieceKind::King | PieceKind::Rook => true,
                    _ => false,
                };
            }
            col = col.saturating_add(1);
        }

        if col != 8 {
            return Err(ChessErrors::InvalidFenString(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFenString(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn apply_castling_rights(castling_part: &str, board: &mut Board) -> Result<(), ChessErrors> {
    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        let (color, rook_col) = match ch {
            'K' => (Color::Light, 7),
            'Q' => (Color::Light, 0),
            'k' => (Color::Dark, 7),
            'q' => (Color::Dark, 0),
            _ => {
                return Err(ChessErrors::InvalidFenString(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        };
        let row = color.back_row();
        for (col, kind) in [(4, PieceKind::King), (rook_col, PieceKind::Rook)] {
            let square = sq(row, col);
            match board.piece_at_mut(square) {
                Some(piece) if piece.kind == kind && piece.color == color => {
                    piece.has_moved = false;
                }
                _ => {
                    return Err(ChessErrors::InvalidFenString(format!(
                        "castling right '{ch}' needs a {kind:?} on {square}"
                    )))
                }
            }
        }
    }

    Ok(())
}

/// Maps the FEN target square (behind the pawn) to the square of the pawn itself.
///
/// The pawn must belong to the side that just moved.
fn parse_en_passant_square(
    en_passant_part: &str,
    board: &Board,
    turn: Color,
) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let pawn_square = match target.row() {
        5 => target.offset(-1, 0),
        2 => target.offset(1, 0),
        _ => None,
    };
    match pawn_square {
        Some(square)
            if board
                .piece_at(square)
                .is_some_and(|p| p.kind == PieceKind::Pawn && p.color == turn.opposite()) =>
        {
            Ok(Some(square))
        }
        _ => Err(ChessErrors::InvalidFenString(format!(
            "no pawn can be captured en passant on {en_passant_part}"
        ))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };
    PieceKind::from_letter(ch).map(|kind| (color, kind))
}
