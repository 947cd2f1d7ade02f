//! Crate root module declarations for the Duel Chess core.
//!
//! Exposes the game model, the legal move generator, static scoring, the
//! minimax/negamax searches with their asynchronous host, and the text
//! helpers used by the terminal front end and by tests.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod attack_tables;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod legal_moves_pieces;
    pub mod perft;
}

pub mod search {
    pub mod best_move;
    pub mod board_scoring;
    pub mod minimax;
    pub mod negamax;
    pub mod random_fallback;
    pub mod search_config;
    pub mod search_control;
    pub mod search_host;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
    pub mod self_play;
}
