//! Static position evaluation.
//!
//! Search delegates leaf scoring to the `BoardScorer` trait so alternate
//! heuristics can be swapped without touching search code. The default
//! `PieceSquareScorer` adds material to mid-game piece-square bonuses.

use crate::game_state::chess_types::*;
use crate::search::piece_square_tables::{mirror_square, table_for};

pub trait BoardScorer {
    /// Score from the perspective of the side to move.
    fn score(&self, board: &Board) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

/// Material balance, White minus Black.
pub fn material_score(board: &Board) -> i32 {
    ALL_PIECE_KINDS.iter().fold(0i32, |score, &kind| {
        let white = board.pieces[Color::White.index()][kind.index()].count_ones() as i32;
        let black = board.pieces[Color::Black.index()][kind.index()].count_ones() as i32;
        score + (white - black) * piece_value(kind)
    })
}

/// Piece-square bonus balance, White minus Black.
pub fn positional_score(board: &Board) -> i32 {
    let mut score = 0i32;

    for kind in ALL_PIECE_KINDS {
        let table = table_for(kind);

        let mut white = board.pieces[Color::White.index()][kind.index()];
        while white != 0 {
            score += table[white.trailing_zeros() as usize];
            white &= white - 1;
        }

        let mut black = board.pieces[Color::Black.index()][kind.index()];
        while black != 0 {
            let square = black.trailing_zeros() as Square;
            score -= table[mirror_square(square) as usize];
            black &= black - 1;
        }
    }

    score
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    fn score(&self, board: &Board) -> i32 {
        let white_minus_black = material_score(board) + positional_score(board);
        match board.side_to_move {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}

/// Material only; no positional terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        let white_minus_black = material_score(board);
        match board.side_to_move {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}

/// Default evaluation used by search, side-to-move perspective.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    PieceSquareScorer.score(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::new();
        assert_eq!(material_score(&board), 0);
        assert_eq!(positional_score(&board), 0);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn extra_rook_scores_plus_material_for_white_and_minus_for_black() {
        // Rook on a1 and kings on e1/e8 all sit on zero-bonus squares.
        let white_to_move = position("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let black_to_move = position("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");

        assert_eq!(positional_score(&white_to_move), 0);
        assert_eq!(material_score(&white_to_move), 500);
        assert_eq!(evaluate(&white_to_move), 500);
        assert_eq!(evaluate(&black_to_move), -500);
    }

    #[test]
    fn evaluation_negates_with_side_to_move() {
        let fen_body = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R";
        let white = position(&format!("{fen_body} w - - 0 1"));
        let black = position(&format!("{fen_body} b - - 0 1"));

        assert_eq!(evaluate(&white), -evaluate(&black));
        assert_eq!(
            evaluate(&white),
            material_score(&white) + positional_score(&white)
        );
    }

    #[test]
    fn mirrored_positions_score_the_same_for_the_mover() {
        // White knight on f3 versus the mirror image, a black knight on f6.
        let white = position("4k3/8/8/8/8/5N2/8/4K3 w - - 0 1");
        let black = position("4k3/8/5n2/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(evaluate(&white), evaluate(&black));
        // f3 is worth +10 to a knight.
        assert_eq!(evaluate(&white), 330);
    }

    #[test]
    fn black_pieces_use_mirrored_squares() {
        // Black pawn on e7 is its home square: mirrored e2 bonus is -20.
        let board = position("4k3/4p3/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(positional_score(&board), 20);
        assert_eq!(material_score(&board), -100);
    }

    #[test]
    fn material_only_scorer_ignores_placement() {
        let board = position("4k3/8/8/8/3N4/8/8/4K3 b - - 0 1");
        assert_eq!(MaterialScorer.score(&board), -320);
        assert_ne!(PieceSquareScorer.score(&board), -320);
    }
}
