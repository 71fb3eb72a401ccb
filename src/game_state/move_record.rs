use crate::game_state::chess_types::*;

/// Undo token for `Board::make_move` / `Board::unmake_move`.
///
/// Records must be reverted in strict LIFO order on the board that produced
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub from_mask: u64,
    pub to_mask: u64,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub prev_side_to_move: Color,
}

impl MoveRecord {
    #[inline]
    pub const fn move_pair(&self) -> MovePair {
        (self.from, self.to)
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}
