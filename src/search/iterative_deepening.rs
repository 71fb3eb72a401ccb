//! Iterative deepening driver over the alpha-beta core.
//!
//! Each depth from 1 up to the configured limit runs a fresh full-window
//! root search; the deepest completed iteration supplies the result. One
//! progress line per iteration is collected in `SearchResult::info_lines`.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::search::alpha_beta::{negamax, terminal_score, SEARCH_INFINITY};
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::move_ordering::{IdentityOrdering, MoveOrdering};
use crate::utils::algebraic::move_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<MovePair>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub info_lines: Vec<String>,
}

pub fn iterative_deepening_search<S: BoardScorer, O: MoveOrdering>(
    board: &mut Board,
    scorer: &S,
    ordering: &O,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    if config.max_depth == 0 {
        return Ok(SearchResult {
            best_score: scorer.score(board),
            nodes: 1,
            ..SearchResult::default()
        });
    }

    let mut result = SearchResult::default();

    for depth in 1..=config.max_depth {
        let mut nodes = 0u64;
        let (best_move, best_score) = search_root(board, scorer, ordering, depth, &mut nodes)?;

        result.best_score = best_score;
        result.nodes += nodes;

        let Some(best_move) = best_move else {
            // No legal moves at the root; deeper iterations see the same.
            break;
        };

        result.best_move = Some(best_move);
        result.reached_depth = depth;
        result.info_lines.push(format!(
            "info depth {depth} score cp {best_score} nodes {nodes} pv {}",
            move_to_algebraic(best_move)?
        ));
    }

    Ok(result)
}

fn search_root<S: BoardScorer, O: MoveOrdering>(
    board: &mut Board,
    scorer: &S,
    ordering: &O,
    depth: u8,
    nodes: &mut u64,
) -> ChessResult<(Option<MovePair>, i32)> {
    *nodes += 1;

    let mut moves = board.generate_all_legal_moves();
    if moves.is_empty() {
        return Ok((None, terminal_score(board)));
    }
    ordering.order(board, &mut moves);

    let mut alpha = -SEARCH_INFINITY;
    let beta = SEARCH_INFINITY;
    let mut best_move = None;
    let mut best_score = -SEARCH_INFINITY;

    for (from, to) in moves {
        let score = {
            let mut child = board.play(from, to)?;
            -negamax(&mut child, scorer, ordering, depth - 1, -beta, -alpha, nodes)?
        };

        // Strict comparison: the first move reaching the best score is kept.
        if score > best_score {
            best_score = score;
            best_move = Some((from, to));
        }
        alpha = alpha.max(score);
    }

    Ok((best_move, best_score))
}

/// Best move for the side to move, searching up to `max_depth` plies with
/// the default evaluator. `None` when `max_depth` is 0 or there is no legal
/// move. The board is left exactly as it was passed in.
pub fn find_best_move(board: &mut Board, max_depth: u8) -> ChessResult<Option<MovePair>> {
    let result = iterative_deepening_search(
        board,
        &PieceSquareScorer,
        &IdentityOrdering,
        SearchConfig { max_depth },
    )?;
    Ok(result.best_move)
}
