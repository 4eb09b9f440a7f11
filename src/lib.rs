//! Crate root module declarations for the Plum Rules chess rules engine.
//!
//! This file exposes the board model, per-piece move generation, the legality
//! and game-over checks, the turn-by-turn `Game` driver and the FEN helpers so
//! binaries, benches and embedding front ends can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod game_state;
    pub mod move_record;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod chess_errors;

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
}
