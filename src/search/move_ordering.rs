//! Move-ordering hook applied before a node's moves are searched.

use crate::game_state::chess_types::*;

pub trait MoveOrdering {
    /// Reorder `moves` in place. Must not add or drop moves.
    fn order(&self, board: &Board, moves: &mut [MovePair]);
}

/// Keeps legal-move enumeration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityOrdering;

impl MoveOrdering for IdentityOrdering {
    #[inline]
    fn order(&self, _board: &Board, _moves: &mut [MovePair]) {}
}
