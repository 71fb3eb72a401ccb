//! Square index conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (for example `e4`) and the
//! rank-major `0..=63` square index used by the bitboards.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{MovePair, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(format!(
            "expected file letter and rank digit, got {square:?}"
        )));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidSquare(format!(
            "invalid file {:?} in {square:?}",
            char::from(bytes[0])
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(format!(
            "invalid rank {:?} in {square:?}",
            char::from(rank)
        )));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessError::InvalidSquare(format!(
            "square index out of bounds: {square}"
        )));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Coordinate form of a move, for example `(12, 28)` -> `"e2e4"`.
pub fn move_to_algebraic((from, to): MovePair) -> ChessResult<String> {
    Ok(format!(
        "{}{}",
        square_to_algebraic(from)?,
        square_to_algebraic(to)?
    ))
}
