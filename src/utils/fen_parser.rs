//! FEN-to-Board parser.
//!
//! Reads piece placement and side to move. Castling, en-passant and clock
//! fields are optional; when present they are validated and then dropped,
//! since the board model has no state for them.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| fen_error("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| fen_error("missing side-to-move"))?;

    let mut board = Board::empty();
    parse_placement(board_part, &mut board)?;
    board.side_to_move = parse_side_to_move(side_part)?;

    if let Some(castling_part) = parts.next() {
        validate_castling_field(castling_part)?;
    }
    if let Some(en_passant_part) = parts.next() {
        if en_passant_part != "-" {
            algebraic_to_square(en_passant_part)
                .map_err(|_| fen_error(format!("invalid en-passant square {en_passant_part}")))?;
        }
    }
    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| fen_error(format!("invalid move clock {clock}")))?;
    }

    if parts.next().is_some() {
        return Err(fen_error("extra trailing fields"));
    }

    Ok(board)
}

fn parse_placement(board_part: &str, board: &mut Board) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(fen_error("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(fen_error(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_code(ch)
                .ok_or_else(|| fen_error(format!("invalid piece character '{ch}'")))?;
            if file >= 8 {
                return Err(fen_error(format!("rank {} has too many files", board_rank + 1)));
            }

            let sq = board_rank * 8 + file;
            board.pieces[piece.color.index()][piece.kind.index()] |= 1u64 << sq;
            file += 1;
        }

        if file != 8 {
            return Err(fen_error(format!(
                "rank {} does not sum to 8 files",
                board_rank + 1
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(fen_error(format!("invalid side-to-move field {side_part}"))),
    }
}

fn validate_castling_field(castling_part: &str) -> ChessResult<()> {
    if castling_part == "-" {
        return Ok(());
    }
    match castling_part.chars().find(|ch| !matches!(ch, 'K' | 'Q' | 'k' | 'q')) {
        Some(ch) => Err(fen_error(format!("invalid castling character '{ch}'"))),
        None => Ok(()),
    }
}

fn fen_error(msg: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(msg.into())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_fen_matches_constructed_board() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(board, Board::new());
    }

    #[test]
    fn trailing_fields_are_optional() {
        let board = parse_fen("4k3/8/8/8/8/8/8/4K3 b").expect("short FEN should parse");
        assert_eq!(board.side_to_move, Color::Black);
        assert_eq!(board.piece_code_at_square(60), 'k');

        parse_fen("4k3/8/8/8/8/8/8/4K3 w KQkq e3 0 1").expect("full FEN should parse");
    }

    #[test]
    fn malformed_fens_are_rejected() {
        let bad = [
            "",
            "4k3/8/8/8/8/8/8/4K3",
            "4k3/8/8/8/8/8/4K3 w",
            "4k3/8/8/8/8/8/8/4K4 w",
            "4k3/8/8/8/8/8/8/4K2 w",
            "4x3/8/8/8/8/8/8/4K3 w",
            "4k3/8/8/8/8/8/8/4K3 x",
            "4k3/8/8/8/8/8/8/4K3 w KX - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - z9 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - a 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
        ];
        for fen in bad {
            let err = parse_fen(fen).expect_err("malformed FEN");
            assert!(matches!(err, ChessError::InvalidFen(_)), "{fen:?}: {err}");
        }
    }
}
