//! Perft node counting over the legal move tree.
//!
//! Uses make/unmake on a single board, so the board is left unchanged once
//! counting completes.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count of the legal move tree `depth` plies deep.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_all_legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (from, to) in moves {
        if let Ok(record) = board.make_move(from, to) {
            nodes += perft(board, depth - 1);
            board.unmake_move(&record);
        }
    }
    nodes
}

/// Per-root-move leaf counts, in legal move enumeration order.
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(MovePair, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = generate_all_legal_moves(board);
    let mut out = Vec::with_capacity(moves.len());
    for (from, to) in moves {
        if let Ok(record) = board.make_move(from, to) {
            out.push(((from, to), perft(board, depth - 1)));
            board.unmake_move(&record);
        }
    }
    out
}

/// Leaf count plus capture/check/mate tallies for the last ply.
pub fn perft_detailed(board: &mut Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (from, to) in generate_all_legal_moves(board) {
        let Ok(record) = board.make_move(from, to) else {
            continue;
        };

        if depth == 1 {
            total.nodes += 1;
            if record.is_capture() {
                total.captures += 1;
            }
            if board.is_king_in_check(board.side_to_move) {
                total.checks += 1;
                if generate_all_legal_moves(board).is_empty() {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft_detailed(board, depth - 1));
        }

        board.unmake_move(&record);
    }
    total
}
