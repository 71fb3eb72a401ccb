//! Full legal move enumeration.
//!
//! Walks the side to move's pieces in ascending square order, tries every
//! pseudo-legal destination with `make_move` and keeps the ones that apply.
//! Each accepted trial is reverted immediately, so the board is unchanged on
//! return.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::pseudo_legal::pseudo_legal_destinations;

pub fn generate_all_legal_moves(board: &mut Board) -> Vec<MovePair> {
    let mut legal = Vec::<MovePair>::with_capacity(64);
    let mut own = board.occupancy(board.side_to_move);

    while own != 0 {
        let from = own.trailing_zeros() as Square;
        for to in pseudo_legal_destinations(board, from) {
            // Any rejection means the candidate is not legal here.
            if let Ok(record) = make_move(board, from, to) {
                legal.push((from, to));
                unmake_move(board, &record);
            }
        }
        own &= own - 1;
    }

    legal
}
