//! In-place move application and reversal.
//!
//! `make_move` validates, applies and legality-checks a move on the board it
//! is given, returning a `MoveRecord` that `unmake_move` consumes to restore
//! the exact prior bitboards and side to move.

use crate::errors::{ChessError, ChessResult, InvalidMoveReason};
use crate::game_state::board::square_mask;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal::pseudo_legal_targets;

pub fn make_move(board: &mut Board, from: Square, to: Square) -> ChessResult<MoveRecord> {
    let moving_color = board.side_to_move;

    let moved_piece = match board.piece_at_square(from) {
        Some(piece) if piece.color == moving_color => piece,
        _ => {
            return Err(ChessError::invalid_move(
                from,
                to,
                InvalidMoveReason::NoPieceForSideToMove,
            ))
        }
    };

    let to_mask = square_mask(to);
    if to_mask == 0 || (pseudo_legal_targets(board, from) & to_mask) == 0 {
        return Err(ChessError::invalid_move(
            from,
            to,
            InvalidMoveReason::NotPseudoLegal,
        ));
    }

    let record = MoveRecord {
        from,
        to,
        from_mask: square_mask(from),
        to_mask,
        moved_piece,
        captured_piece: board.piece_at_square(to),
        prev_side_to_move: moving_color,
    };

    board.remove_all_at(record.to_mask);
    let moved_bb = &mut board.pieces[moving_color.index()][moved_piece.kind.index()];
    *moved_bb &= !record.from_mask;
    *moved_bb |= record.to_mask;

    if is_king_in_check(board, moving_color) {
        unmake_move(board, &record);
        return Err(ChessError::invalid_move(
            from,
            to,
            InvalidMoveReason::LeavesKingInCheck,
        ));
    }

    board.side_to_move = moving_color.opposite();
    Ok(record)
}

pub fn unmake_move(board: &mut Board, record: &MoveRecord) {
    let moved = record.moved_piece;
    let moved_bb = &mut board.pieces[moved.color.index()][moved.kind.index()];
    *moved_bb &= !record.to_mask;
    *moved_bb |= record.from_mask;

    if let Some(captured) = record.captured_piece {
        board.pieces[captured.color.index()][captured.kind.index()] |= record.to_mask;
    }

    board.side_to_move = record.prev_side_to_move;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn quiet_move_round_trips() {
        let mut board = Board::new();
        let before = board.clone();

        let record = make_move(&mut board, 12, 28).expect("e2e4 is legal");
        assert_eq!(board.piece_code_at_square(12), '.');
        assert_eq!(board.piece_code_at_square(28), 'P');
        assert_eq!(board.side_to_move, Color::Black);
        assert!(!record.is_capture());
        assert!(board.is_disjoint());

        unmake_move(&mut board, &record);
        assert_eq!(board, before);
    }

    #[test]
    fn capture_restores_victim_on_unmake() {
        let mut board = position("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        let before = board.clone();

        let record = make_move(&mut board, 28, 35).expect("exd5 is legal");
        assert_eq!(
            record.captured_piece,
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(board.occupancy(Color::Black).count_ones(), 1);
        assert!(board.is_disjoint());

        unmake_move(&mut board, &record);
        assert_eq!(board, before);
    }

    #[test]
    fn rejects_empty_or_enemy_source() {
        let mut board = Board::new();
        let before = board.clone();

        let err = make_move(&mut board, 28, 36).expect_err("e4 is empty");
        assert_eq!(err.move_reason(), Some(InvalidMoveReason::NoPieceForSideToMove));

        let err = make_move(&mut board, 52, 36).expect_err("black pawn, white to move");
        assert_eq!(err.move_reason(), Some(InvalidMoveReason::NoPieceForSideToMove));

        assert_eq!(board, before);
    }

    #[test]
    fn rejects_target_outside_piece_movement() {
        let mut board = Board::new();
        let before = board.clone();

        let err = make_move(&mut board, 12, 36).expect_err("pawn cannot jump three ranks");
        assert_eq!(err.move_reason(), Some(InvalidMoveReason::NotPseudoLegal));

        let err = make_move(&mut board, 1, 70).expect_err("off-board target");
        assert_eq!(err.move_reason(), Some(InvalidMoveReason::NotPseudoLegal));

        assert_eq!(board, before);
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        // White rook e2 is pinned by the black rook e8 against the king on e1.
        let mut board = position("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let before = board.clone();

        let err = make_move(&mut board, 12, 11).expect_err("pinned rook leaves the file");
        assert_eq!(err.move_reason(), Some(InvalidMoveReason::LeavesKingInCheck));
        assert_eq!(board, before);

        make_move(&mut board, 12, 60).expect("capturing the pinner is legal");
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = position("3r3k/8/8/8/8/8/8/4K3 w - - 0 1");
        let before = board.clone();

        let err = make_move(&mut board, 4, 3).expect_err("d1 is covered by the rook");
        assert_eq!(err.move_reason(), Some(InvalidMoveReason::LeavesKingInCheck));
        assert_eq!(board, before);
    }
}
