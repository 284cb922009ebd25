//! Ray-casting for rooks, bishops and queens.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Generate moves along each direction in `dirs` until the edge or a piece.
///
/// Empty squares are added; the first enemy piece is added as a capture and
/// ends the ray; an allied piece ends the ray without being added.
pub(super) fn gen_rays(
    board: &Board,
    sq: Square,
    piece: Piece,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in dirs {
        let mut cur = sq.offset(dr, dc);
        while let Some(dest) = cur {
            match board.piece_at(dest) {
                None => moves.push(Move::new(sq, dest, piece, None)),
                Some(target) => {
                    if target.color() != piece.color() {
                        moves.push(Move::new(sq, dest, piece, Some(target)));
                    }
                    break;
                }
            }
            cur = dest.offset(dr, dc);
        }
    }
}
