//! Canonical chess-rule constants and the optional rule switches.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Rule switches layered on top of the piece predicates.
///
/// Both default to `false`, which gives the classic behavior of this engine:
/// a move is accepted whenever the piece predicate accepts it, and castling
/// only looks at the pieces, not at attacked squares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleOptions {
    /// Reject moves that leave the mover's own king in check.
    pub reject_self_check: bool,
    /// Forbid castling out of, through, or into check.
    pub strict_castling: bool,
}

impl RuleOptions {
    /// Full FIDE-style move legality (both switches on).
    pub const fn strict() -> Self {
        Self {
            reject_self_check: true,
            strict_castling: true,
        }
    }
}
