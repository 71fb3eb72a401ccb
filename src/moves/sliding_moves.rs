//! Ray casting for rook, bishop and queen.
//!
//! Rays walk a flattened square index by a fixed delta. Each step is guarded
//! so a ray never wraps from one edge of the board to the other.

use crate::game_state::chess_types::Square;

/// North, south, east, west.
pub const ORTHOGONAL_DELTAS: [i8; 4] = [8, -8, 1, -1];
/// North-east, south-west, north-west, south-east.
pub const DIAGONAL_DELTAS: [i8; 4] = [9, -9, 7, -7];

/// True when `to` is still on the ray that left `from` along `delta`.
#[inline]
pub fn stays_on_ray(from: Square, to: Square, delta: i8) -> bool {
    let file_diff = (to % 8) as i8 - (from % 8) as i8;
    let rank_diff = (to / 8) as i8 - (from / 8) as i8;

    match delta {
        1 | -1 => rank_diff == 0,
        8 | -8 => file_diff == 0,
        9 | -7 => file_diff > 0 && file_diff.abs() == rank_diff.abs(),
        7 | -9 => file_diff < 0 && file_diff.abs() == rank_diff.abs(),
        _ => false,
    }
}

/// Squares reached along one ray, including the first occupied square.
#[inline]
pub fn ray_attacks(from: Square, delta: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut current = from as i8 + delta;

    while (0..64).contains(&current) && stays_on_ray(from, current as Square, delta) {
        let bit = 1u64 << current;
        attacks |= bit;
        if (occupancy & bit) != 0 {
            break;
        }
        current += delta;
    }

    attacks
}

/// First occupied square along a ray, if any.
#[inline]
pub fn first_blocker(from: Square, delta: i8, occupancy: u64) -> Option<Square> {
    let blockers = ray_attacks(from, delta, occupancy) & occupancy;
    if blockers == 0 {
        None
    } else {
        Some(blockers.trailing_zeros() as Square)
    }
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ORTHOGONAL_DELTAS
        .iter()
        .fold(0u64, |acc, &delta| acc | ray_attacks(square, delta, occupancy))
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    DIAGONAL_DELTAS
        .iter()
        .fold(0u64, |acc, &delta| acc | ray_attacks(square, delta, occupancy))
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}
