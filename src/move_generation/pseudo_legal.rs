//! Pseudo-legal destination generation.
//!
//! Destinations follow each piece's movement rules and the current
//! occupancy but ignore whether the mover's own king is left attacked.

use crate::game_state::board::square_mask;
use crate::game_state::chess_rules::{RANK_2, RANK_7};
use crate::game_state::chess_types::*;
use crate::moves::leaper_attacks::{king_attacks, knight_attacks, pawn_attacks};
use crate::moves::sliding_moves::{bishop_attacks, queen_attacks, rook_attacks};

/// Destination bitboard for the piece on `from`.
///
/// Empty when the square is empty or holds a piece of the side not to move.
pub fn pseudo_legal_targets(board: &Board, from: Square) -> u64 {
    let Some(piece) = board.piece_at_square(from) else {
        return 0;
    };
    if piece.color != board.side_to_move {
        return 0;
    }

    let occupancy = board.all_occupancy();
    let attacks = match piece.kind {
        PieceKind::Pawn => return pawn_targets(board, piece.color, from),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::King => king_attacks(from),
        // Rays end on the first blocker, so masking out own pieces leaves
        // empty squares plus at most one capture per ray.
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
    };
    without_own(board, piece.color, attacks)
}

/// Destinations for the piece on `from`, in ascending square order.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut targets = pseudo_legal_targets(board, from);
    let mut out = Vec::with_capacity(targets.count_ones() as usize);
    while targets != 0 {
        out.push(targets.trailing_zeros() as Square);
        targets &= targets - 1;
    }
    out
}

fn pawn_targets(board: &Board, color: Color, from: Square) -> u64 {
    let from_mask = square_mask(from);
    let empty = !board.all_occupancy();
    let enemy = board.occupancy(color.opposite());

    let (single, home_rank) = match color {
        Color::White => ((from_mask << 8) & empty, RANK_2),
        Color::Black => ((from_mask >> 8) & empty, RANK_7),
    };

    let mut targets = single;
    if single != 0 && (from_mask & home_rank) != 0 {
        let double = match color {
            Color::White => single << 8,
            Color::Black => single >> 8,
        };
        targets |= double & empty;
    }

    targets | (pawn_attacks(color, from) & enemy)
}

#[inline]
fn without_own(board: &Board, color: Color, attacks: u64) -> u64 {
    attacks & !board.occupancy(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let board = Board::new();
        assert_eq!(pseudo_legal_destinations(&board, 12), vec![20, 28]);
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let board = position("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(pseudo_legal_destinations(&board, 12).is_empty());

        let board = position("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert_eq!(pseudo_legal_destinations(&board, 12), vec![20]);
    }

    #[test]
    fn black_pawn_moves_down_and_captures_diagonally() {
        let board = position("4k3/3p4/2P1P3/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(pseudo_legal_destinations(&board, 51), vec![35, 42, 43, 44]);
    }

    #[test]
    fn pawn_on_last_rank_has_no_moves() {
        let board = position("P3k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(pseudo_legal_destinations(&board, 56).is_empty());
    }

    #[test]
    fn knight_excludes_friendly_squares() {
        let board = Board::new();
        assert_eq!(pseudo_legal_destinations(&board, 1), vec![16, 18]);
    }

    #[test]
    fn rook_stops_before_friend_and_on_enemy() {
        let board = position("4k3/8/8/3p4/8/8/8/R2PK3 w - - 0 1");
        let targets = pseudo_legal_destinations(&board, 0);
        // a-file up to a8 (7 squares) plus b1 and c1.
        assert_eq!(targets.len(), 9);
        assert!(targets.contains(&56));
        assert!(targets.contains(&2));
        assert!(!targets.contains(&3));
    }

    #[test]
    fn bishop_captures_enemy_and_does_not_pass_it() {
        let board = position("4k3/8/8/8/3p4/8/1B6/4K3 w - - 0 1");
        let targets = pseudo_legal_destinations(&board, 9);
        assert!(targets.contains(&27));
        assert!(!targets.contains(&36));
        assert!(targets.contains(&0));
        assert!(targets.contains(&16));
        assert!(targets.contains(&2));
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let board = position("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
        assert_eq!(pseudo_legal_destinations(&board, 27).len(), 27);
    }

    #[test]
    fn pieces_of_side_not_to_move_have_no_destinations() {
        let board = Board::new();
        assert!(pseudo_legal_destinations(&board, 52).is_empty());
        assert!(pseudo_legal_destinations(&board, 28).is_empty());
        assert!(pseudo_legal_destinations(&board, 200).is_empty());
    }
}
