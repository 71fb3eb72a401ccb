use crate::game_state::board::square_mask;
use crate::game_state::chess_types::*;
use crate::moves::leaper_attacks::{king_attacks, knight_attacks, pawn_attacks};
use crate::moves::sliding_moves::{
    bishop_attacks, first_blocker, queen_attacks, rook_attacks, DIAGONAL_DELTAS,
    ORTHOGONAL_DELTAS,
};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let kings = board.pieces[color.index()][PieceKind::King.index()];
    if kings == 0 {
        None
    } else {
        Some(kings.trailing_zeros() as Square)
    }
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    if square_mask(square) == 0 {
        return false;
    }
    let theirs = &board.pieces[attacker.index()];

    if knight_attacks(square) & theirs[PieceKind::Knight.index()] != 0 {
        return true;
    }
    if king_attacks(square) & theirs[PieceKind::King.index()] != 0 {
        return true;
    }
    // An attacker pawn hits `square` exactly when a pawn of the other color
    // standing on `square` would capture onto the attacker's square.
    if pawn_attacks(attacker.opposite(), square) & theirs[PieceKind::Pawn.index()] != 0 {
        return true;
    }

    let occupancy = board.all_occupancy();
    let queens = theirs[PieceKind::Queen.index()];
    let rooks_queens = theirs[PieceKind::Rook.index()] | queens;
    let bishops_queens = theirs[PieceKind::Bishop.index()] | queens;

    let hits = |deltas: &[i8], sliders: u64| {
        deltas.iter().any(|&delta| {
            first_blocker(square, delta, occupancy)
                .is_some_and(|blocker| square_mask(blocker) & sliders != 0)
        })
    };

    hits(&ORTHOGONAL_DELTAS[..], rooks_queens) || hits(&DIAGONAL_DELTAS[..], bishops_queens)
}

/// Every `attacker` piece that attacks `square`, found by projecting each
/// piece's attack set outward from its own square.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker: Color,
) -> Vec<(Square, PieceKind)> {
    let target_mask = square_mask(square);
    let occupancy = board.all_occupancy();
    let mut attackers = Vec::<(Square, PieceKind)>::new();

    for kind in ALL_PIECE_KINDS {
        let mut pieces = board.pieces[attacker.index()][kind.index()];
        while pieces != 0 {
            let from = pieces.trailing_zeros() as Square;
            let attacks = match kind {
                PieceKind::Pawn => pawn_attacks(attacker, from),
                PieceKind::Knight => knight_attacks(from),
                PieceKind::Bishop => bishop_attacks(from, occupancy),
                PieceKind::Rook => rook_attacks(from, occupancy),
                PieceKind::Queen => queen_attacks(from, occupancy),
                PieceKind::King => king_attacks(from),
            };
            if attacks & target_mask != 0 {
                attackers.push((from, kind));
            }
            pieces &= pieces - 1;
        }
    }

    attackers
}
