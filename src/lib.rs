//! Crate root module declarations for the mailbox chess engine.
//!
//! Exposes the board and session types, the per-piece move rules, check and
//! game-end evaluation, the greedy opponent, notation helpers, and the console
//! front-end used by the binary.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod snapshot;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod line_paths;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod game_log;
    pub mod pgn;
    pub mod render_game_state;
}

pub mod console {
    pub mod console_config;
    pub mod console_loop;
}
