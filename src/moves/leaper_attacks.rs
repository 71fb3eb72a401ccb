//! Precomputed attack tables for leaper pieces.
//!
//! Knight, king and pawn-capture patterns depend only on the from-square, so
//! they are built at compile time from `(file, rank)` offsets and shared by
//! every board.

use crate::game_state::chess_types::{Color, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const WHITE_PAWN_CAPTURE_OFFSETS: [(i32, i32); 2] = [(-1, 1), (1, 1)];
const BLACK_PAWN_CAPTURE_OFFSETS: [(i32, i32); 2] = [(-1, -1), (1, -1)];

pub static KNIGHT_ATTACKS: [u64; 64] = generate_leaper_table(&KNIGHT_OFFSETS);
pub static KING_ATTACKS: [u64; 64] = generate_leaper_table(&KING_OFFSETS);
pub static WHITE_PAWN_ATTACKS: [u64; 64] = generate_leaper_table(&WHITE_PAWN_CAPTURE_OFFSETS);
pub static BLACK_PAWN_ATTACKS: [u64; 64] = generate_leaper_table(&BLACK_PAWN_CAPTURE_OFFSETS);

#[inline]
pub fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

/// Squares a pawn of `color` standing on `square` would capture on.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_leaper_table(offsets: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        let mut i = 0usize;
        while i < offsets.len() {
            let (df, dr) = offsets[i];
            attacks |= bit_if_on_board(file + df, rank + dr);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn bit_if_on_board(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }
    1u64 << (rank * 8 + file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!(knight_attacks(d4).count_ones(), 8);
    }

    #[test]
    fn knight_in_corner_does_not_wrap() {
        let h1 = 7u8;
        let expected = (1u64 << 13) | (1u64 << 22);
        assert_eq!(knight_attacks(h1), expected);
    }

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        assert_eq!(king_attacks(0).count_ones(), 3);
        assert_eq!(king_attacks(27).count_ones(), 8);
    }

    #[test]
    fn pawn_capture_tables_point_forward() {
        let e2 = 12u8;
        assert_eq!(pawn_attacks(Color::White, e2), (1u64 << 19) | (1u64 << 21));

        let e7 = 52u8;
        assert_eq!(pawn_attacks(Color::Black, e7), (1u64 << 43) | (1u64 << 45));
    }

    #[test]
    fn pawn_capture_tables_respect_edges() {
        let a2 = 8u8;
        assert_eq!(pawn_attacks(Color::White, a2), 1u64 << 17);
        let h8 = 63u8;
        assert_eq!(pawn_attacks(Color::White, h8), 0);
        let a1 = 0u8;
        assert_eq!(pawn_attacks(Color::Black, a1), 0);
    }
}
