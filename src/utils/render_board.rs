//! Plain-text board renderer.
//!
//! Rank 8 is printed first, files labelled on both edges, one character per
//! square using the piece codes (`.` for empty).

use crate::game_state::chess_types::*;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        let rank_char = char::from(b'1' + rank);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8u8 {
            out.push(board.piece_code_at_square(rank * 8 + file));
            out.push(' ');
        }

        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out
}
