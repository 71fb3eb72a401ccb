//! Crate root module declarations for the chess decision core.
//!
//! Exposes the board model, move generation and check detection, static
//! evaluation, and the alpha-beta search, plus text helpers for squares,
//! FEN, and board rendering.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod move_record;
    pub mod scoped_move;
}

pub mod moves {
    pub mod leaper_attacks;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_legal;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod move_ordering;
    pub mod piece_square_tables;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}

pub use errors::{ChessError, ChessResult, InvalidMoveReason};
pub use game_state::chess_types::{Board, Color, MovePair, Piece, PieceKind, Square};
pub use search::alpha_beta::alpha_beta;
pub use search::board_scoring::evaluate;
pub use search::iterative_deepening::find_best_move;
