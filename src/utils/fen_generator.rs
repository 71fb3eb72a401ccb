use crate::game_state::chess_types::*;

/// FEN for the board. Fields the board does not model are written as
/// `- - 0 1`.
pub fn generate_fen(board: &Board) -> String {
    let side_to_move = match board.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    format!("{} {} - - 0 1", generate_placement_field(board), side_to_move)
}

fn generate_placement_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_at_square(rank * 8 + file) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.code());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_board_produces_starting_fen() {
        assert_eq!(generate_fen(&Board::new()), STARTING_POSITION_FEN);
    }

    #[test]
    fn fen_tracks_moves_and_side_to_move() {
        let mut board = Board::new();
        board.make_move(12, 28).expect("e2e4 is legal");
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"
        );

        let reparsed = Board::from_fen(&board.to_fen()).expect("generated FEN should parse");
        assert_eq!(reparsed, board);
    }
}
