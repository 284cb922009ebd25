//! Single-step pieces: knight jumps and king steps.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Generate moves to each on-board `steps` offset not held by an ally.
pub(super) fn gen_steps(
    board: &Board,
    sq: Square,
    piece: Piece,
    steps: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in steps {
        let Some(dest) = sq.offset(dr, dc) else {
            continue;
        };
        let target = board.piece_at(dest);
        if target.is_none_or(|p| p.color() != piece.color()) {
            moves.push(Move::new(sq, dest, piece, target));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_steps;
    use crate::attacks::{KING_STEPS, KNIGHT_STEPS};
    use crate::board::Board;
    use crate::square::Square;

    #[test]
    fn knight_in_corner_has_two_moves() {
        let board: Board = "4k3/8/8/8/8/8/8/N3K3".parse().unwrap();
        let mut moves = Vec::new();
        gen_steps(&board, Square::A1, board.piece_at(Square::A1).unwrap(), &KNIGHT_STEPS, &mut moves);
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn allies_block_enemies_are_captured() {
        let board: Board = "4k3/8/8/8/8/1p6/2P5/N3K3".parse().unwrap();
        let mut moves = Vec::new();
        gen_steps(&board, Square::A1, board.piece_at(Square::A1).unwrap(), &KNIGHT_STEPS, &mut moves);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].dest(), Square::B3);
        assert!(moves[0].is_capture());
    }

    #[test]
    fn king_in_center_has_eight_steps() {
        let board: Board = "4k3/8/8/8/3K4/8/8/8".parse().unwrap();
        let mut moves = Vec::new();
        gen_steps(&board, Square::D4, board.piece_at(Square::D4).unwrap(), &KING_STEPS, &mut moves);
        assert_eq!(moves.len(), 8);
    }
}
