//! Errors used throughout the chess core.
//!
//! `ChessError` is the single error type returned by move application,
//! coordinate parsing and FEN import. Every variant is recoverable: the board
//! is left exactly as it was before the failing call.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;

pub type ChessResult<T> = Result<T, ChessError>;

/// Why `make_move` refused a `(from, to)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// The source square holds no piece of the side to move.
    NoPieceForSideToMove,
    /// The destination is not reachable under the piece's movement rules.
    NotPseudoLegal,
    /// The move would leave the mover's own king attacked.
    LeavesKingInCheck,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::NoPieceForSideToMove => {
                write!(f, "no piece of the side to move at source")
            }
            InvalidMoveReason::NotPseudoLegal => {
                write!(f, "target not in pseudo-legal moves")
            }
            InvalidMoveReason::LeavesKingInCheck => {
                write!(f, "move would leave king in check")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    InvalidMove {
        from: Square,
        to: Square,
        reason: InvalidMoveReason,
    },
    InvalidSquare(String),
    InvalidFen(String),
}

impl ChessError {
    #[inline]
    pub const fn invalid_move(from: Square, to: Square, reason: InvalidMoveReason) -> Self {
        ChessError::InvalidMove { from, to, reason }
    }

    /// The rejection reason when this is an `InvalidMove`.
    pub const fn move_reason(&self) -> Option<InvalidMoveReason> {
        match self {
            ChessError::InvalidMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidMove { from, to, reason } => {
                write!(f, "invalid move {from}->{to}: {reason}")
            }
            ChessError::InvalidSquare(msg) => write!(f, "invalid square: {msg}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
        }
    }
}

impl Error for ChessError {}
