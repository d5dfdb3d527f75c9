//! Crate root module declarations for the ownchess position engine.
//!
//! Exposes the board model, move generation (pseudolegal projection, check
//! detection, legal filtering, make/undo, game end, perft), notation helpers
//! and the interactive console so the binary, tests and benches share stable
//! module paths.

pub mod errors;

pub mod board {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_offsets;
}

pub mod move_generation {
    pub mod game_end;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_moves_leapers;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliders;
    pub mod pseudolegal_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_position;
}

pub mod console {
    pub mod console_top;
}
