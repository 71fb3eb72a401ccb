//! Fail-hard negamax alpha-beta over a single shared board.
//!
//! Every child is searched through a `ScopedMove`, so the board is restored
//! on every exit path, including early returns on a beta cutoff or an error.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::move_ordering::{IdentityOrdering, MoveOrdering};

/// Magnitude of a checkmate score. The mated side sees `-MATE_SCORE`.
pub const MATE_SCORE: i32 = 99_999;
/// Root window bound; strictly outside every reachable score.
pub const SEARCH_INFINITY: i32 = 100_000;

pub fn negamax<S: BoardScorer, O: MoveOrdering>(
    board: &mut Board,
    scorer: &S,
    ordering: &O,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> ChessResult<i32> {
    *nodes += 1;

    if depth == 0 {
        return Ok(scorer.score(board));
    }

    let mut moves = board.generate_all_legal_moves();
    if moves.is_empty() {
        return Ok(terminal_score(board));
    }
    ordering.order(board, &mut moves);

    for (from, to) in moves {
        let score = {
            let mut child = board.play(from, to)?;
            -negamax(&mut child, scorer, ordering, depth - 1, -beta, -alpha, nodes)?
        };

        if score >= beta {
            return Ok(beta);
        }
        alpha = alpha.max(score);
    }

    Ok(alpha)
}

/// Score of a position with no legal moves: mated or stalemated.
#[inline]
pub fn terminal_score(board: &Board) -> i32 {
    if board.is_king_in_check(board.side_to_move) {
        -MATE_SCORE
    } else {
        0
    }
}

/// Alpha-beta with the default evaluator and enumeration-order moves.
/// Score is from the side to move's perspective.
pub fn alpha_beta(board: &mut Board, depth: u8, alpha: i32, beta: i32) -> ChessResult<i32> {
    let mut nodes = 0u64;
    negamax(
        board,
        &PieceSquareScorer,
        &IdentityOrdering,
        depth,
        alpha,
        beta,
        &mut nodes,
    )
}
