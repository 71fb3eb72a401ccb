//! Bitboard position model.
//!
//! `Board` holds twelve disjoint piece bitboards and the side to move. All
//! occupancy sets are derived on demand so they can never fall out of sync
//! with the piece sets. The board is mutated in place by `make_move` and
//! restored by `unmake_move`; search never clones it.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_PIECES;
use crate::game_state::chess_types::*;
use crate::game_state::scoped_move::ScopedMove;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_generator::generate_all_legal_moves;
use crate::move_generation::pseudo_legal::pseudo_legal_destinations;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_board::render_board;

/// One-bit mask for `square`, or `0` when the index is off the board.
#[inline]
pub fn square_mask(square: Square) -> u64 {
    1u64.checked_shl(u32::from(square)).unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Piece bitboards indexed `[color][piece_kind]`.
    pub pieces: [[u64; 6]; 2],
    pub side_to_move: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position, White to move.
    #[inline]
    pub fn new() -> Self {
        Self {
            pieces: STARTING_PIECES,
            side_to_move: Color::White,
        }
    }

    /// No pieces, White to move. Starting point for hand-built positions.
    #[inline]
    pub fn empty() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            side_to_move: Color::White,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn render(&self) -> String {
        render_board(self)
    }

    // --- Occupancy ---

    #[inline]
    pub fn bitboard(&self, piece: Piece) -> u64 {
        self.pieces[piece.color.index()][piece.kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.pieces[color.index()]
            .iter()
            .fold(0u64, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn white_occupancy(&self) -> u64 {
        self.occupancy(Color::White)
    }

    #[inline]
    pub fn black_occupancy(&self) -> u64 {
        self.occupancy(Color::Black)
    }

    #[inline]
    pub fn all_occupancy(&self) -> u64 {
        self.white_occupancy() | self.black_occupancy()
    }

    // --- Piece lookup ---

    /// Piece on `square`, scanning White then Black in pawn..king order.
    pub fn piece_at_square(&self, square: Square) -> Option<Piece> {
        let mask = square_mask(square);
        if mask == 0 {
            return None;
        }
        for color in ALL_COLORS {
            for kind in ALL_PIECE_KINDS {
                if (self.pieces[color.index()][kind.index()] & mask) != 0 {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    /// Single-character code of the piece on `square`, `'.'` when empty.
    #[inline]
    pub fn piece_code_at_square(&self, square: Square) -> char {
        self.piece_at_square(square)
            .map_or(EMPTY_SQUARE_CODE, Piece::code)
    }

    // --- Position editing ---

    /// Place `piece` on `square`, replacing whatever stood there.
    pub fn put_piece(&mut self, square: Square, piece: Piece) -> ChessResult<()> {
        let mask = square_mask(square);
        if mask == 0 {
            return Err(ChessError::InvalidSquare(format!(
                "square index out of bounds: {square}"
            )));
        }
        self.remove_all_at(mask);
        self.pieces[piece.color.index()][piece.kind.index()] |= mask;
        Ok(())
    }

    /// Remove any piece from `square`; returns what was there.
    pub fn clear_square(&mut self, square: Square) -> Option<Piece> {
        let previous = self.piece_at_square(square);
        self.remove_all_at(square_mask(square));
        previous
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn remove_all_at(&mut self, mask: u64) {
        for color_sets in self.pieces.iter_mut() {
            for bb in color_sets.iter_mut() {
                *bb &= !mask;
            }
        }
    }

    /// True when no square is claimed by more than one bitboard.
    pub fn is_disjoint(&self) -> bool {
        let mut seen = 0u64;
        for color_sets in self.pieces.iter() {
            for &bb in color_sets.iter() {
                if (seen & bb) != 0 {
                    return false;
                }
                seen |= bb;
            }
        }
        true
    }

    // --- Move generation and application ---

    #[inline]
    pub fn pseudo_legal_destinations(&self, from: Square) -> Vec<Square> {
        pseudo_legal_destinations(self, from)
    }

    #[inline]
    pub fn make_move(&mut self, from: Square, to: Square) -> ChessResult<MoveRecord> {
        make_move(self, from, to)
    }

    #[inline]
    pub fn unmake_move(&mut self, record: &MoveRecord) {
        unmake_move(self, record)
    }

    /// Apply a move that is reverted when the returned guard is dropped.
    #[inline]
    pub fn play(&mut self, from: Square, to: Square) -> ChessResult<ScopedMove<'_>> {
        ScopedMove::apply(self, from, to)
    }

    /// Commit a move given in algebraic coordinates, for example `("e2", "e4")`.
    pub fn move_piece(&mut self, from: &str, to: &str) -> ChessResult<MoveRecord> {
        let from_sq = algebraic_to_square(from)?;
        let to_sq = algebraic_to_square(to)?;
        self.make_move(from_sq, to_sq)
    }

    #[inline]
    pub fn generate_all_legal_moves(&mut self) -> Vec<MovePair> {
        generate_all_legal_moves(self)
    }

    // --- Attack and check detection ---

    #[inline]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        is_square_attacked(self, square, attacker)
    }

    #[inline]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_thirty_two_disjoint_pieces() {
        let board = Board::new();
        assert_eq!(board.all_occupancy().count_ones(), 32);
        assert_eq!(board.white_occupancy(), 0x0000_0000_0000_FFFF);
        assert_eq!(board.black_occupancy(), 0xFFFF_0000_0000_0000);
        assert!(board.is_disjoint());
        assert_eq!(board.side_to_move, Color::White);
    }

    #[test]
    fn piece_codes_in_starting_position() {
        let board = Board::new();
        assert_eq!(board.piece_code_at_square(0), 'R');
        assert_eq!(board.piece_code_at_square(4), 'K');
        assert_eq!(board.piece_code_at_square(3), 'Q');
        assert_eq!(board.piece_code_at_square(12), 'P');
        assert_eq!(board.piece_code_at_square(28), '.');
        assert_eq!(board.piece_code_at_square(59), 'q');
        assert_eq!(board.piece_code_at_square(62), 'n');
        assert_eq!(board.piece_code_at_square(64), '.');
    }

    #[test]
    fn put_piece_replaces_occupant_and_keeps_sets_disjoint() {
        let mut board = Board::new();
        let white_queen = Piece::new(Color::White, PieceKind::Queen);

        board
            .put_piece(52, white_queen)
            .expect("square 52 is on the board");

        assert!(board.is_disjoint());
        assert_eq!(board.piece_at_square(52), Some(white_queen));
        assert_eq!(
            board.bitboard(Piece::new(Color::Black, PieceKind::Pawn)).count_ones(),
            7
        );
    }

    #[test]
    fn put_piece_rejects_off_board_square() {
        let mut board = Board::empty();
        let err = board
            .put_piece(64, Piece::new(Color::White, PieceKind::King))
            .expect_err("square 64 is off the board");
        assert!(matches!(err, ChessError::InvalidSquare(_)));
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn clear_square_returns_previous_piece() {
        let mut board = Board::new();
        assert_eq!(
            board.clear_square(1),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(board.clear_square(1), None);
        assert_eq!(board.all_occupancy().count_ones(), 31);
    }

    #[test]
    fn move_piece_accepts_algebraic_coordinates() {
        let mut board = Board::new();
        let record = board.move_piece("e2", "e4").expect("e2e4 is legal");

        assert_eq!(record.move_pair(), (12, 28));
        assert_eq!(board.piece_code_at_square(28), 'P');
        assert_eq!(board.side_to_move, Color::Black);

        let err = board.move_piece("e9", "e5").expect_err("e9 is not a square");
        assert!(matches!(err, ChessError::InvalidSquare(_)));
    }
}
