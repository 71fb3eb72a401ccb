//! Drop guard pairing one `make_move` with exactly one `unmake_move`.

use std::ops::{Deref, DerefMut};

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;

/// A move applied to a borrowed board, reverted when the guard goes out of
/// scope. While the guard lives the board is reachable only through it.
#[derive(Debug)]
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    record: MoveRecord,
}

impl<'a> ScopedMove<'a> {
    pub fn apply(board: &'a mut Board, from: Square, to: Square) -> ChessResult<Self> {
        let record = board.make_move(from, to)?;
        Ok(Self { board, record })
    }

    #[inline]
    pub fn record(&self) -> &MoveRecord {
        &self.record
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.unmake_move(&self.record);
    }
}
