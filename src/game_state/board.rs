//! 8x8 mailbox board.
//!
//! Each square holds at most one `Piece`. The board owns every piece it holds;
//! moving a piece transfers it between slots and capturing drops it.

use crate::game_state::chess_types::*;

/// Back-rank layout shared by both colors, file a through h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position with all 32 pieces unmoved.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::Dark, Color::Light] {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as u8;
                board.place(sq(back, col), color, *kind);
                board.place(sq(pawns, col), color, PieceKind::Pawn);
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row() as usize][square.col() as usize].as_ref()
    }

    #[inline]
    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.squares[square.row() as usize][square.col() as usize].as_mut()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True when `square` holds a piece of `color`.
    #[inline]
    pub fn has_color(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color == color)
    }

    /// Creates a fresh unmoved piece on `square`, replacing any occupant.
    pub fn place(&mut self, square: Square, color: Color, kind: PieceKind) {
        self.put(square, Piece::new(color, kind, square));
    }

    /// Stores `piece` on `square`, rewriting its position. Returns the previous occupant.
    pub fn put(&mut self, square: Square, mut piece: Piece) -> Option<Piece> {
        piece.position = square;
        self.squares[square.row() as usize][square.col() as usize].replace(piece)
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Moves whatever stands on `from` to `to`, returning the displaced occupant of `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        match self.remove(from) {
            Some(piece) => self.put(to, piece),
            None => None,
        }
    }

    /// Read-only scan of all 64 squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<&Piece>)> + '_ {
        Square::all().map(move |square| (square, self.piece_at(square)))
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.squares().filter_map(move |(square, piece)| {
            piece.filter(|p| p.color == color).map(|p| (square, p))
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// One-character tag per square: `.` when empty, otherwise `Piece::tag`.
    #[inline]
    pub fn tag_at(&self, square: Square) -> char {
        self.piece_at(square).map_or('.', Piece::tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_has_32_pieces_and_one_king_each() {
        let board = Board::standard();
        assert_eq!(board.squares().filter(|(_, p)| p.is_some()).count(), 32);
        assert_eq!(board.king_square(Color::Light), Some(sq(7, 4)));
        assert_eq!(board.king_square(Color::Dark), Some(sq(0, 4)));
        assert_eq!(board.tag_at(sq(0, 3)), 'q');
        assert_eq!(board.tag_at(sq(7, 3)), 'Q');
        assert_eq!(board.tag_at(sq(4, 4)), '.');
    }

    #[test]
    fn pieces_record_their_own_square() {
        let board = Board::standard();
        for (square, piece) in board.squares() {
            if let Some(piece) = piece {
                assert_eq!(piece.position, square);
                assert!(!piece.has_moved);
            }
        }
    }

    #[test]
    fn relocate_moves_ownership_and_returns_capture() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Color::Light, PieceKind::Rook);
        board.place(sq(4, 0), Color::Dark, PieceKind::Knight);

        let captured = board.relocate(sq(4, 4), sq(4, 0)).expect("knight should be captured");
        assert_eq!(captured.kind, PieceKind::Knight);
        assert!(board.is_empty(sq(4, 4)));
        let rook = board.piece_at(sq(4, 0)).expect("rook should have moved");
        assert_eq!(rook.position, sq(4, 0));
        assert_eq!(rook.color, Color::Light);
    }
}
