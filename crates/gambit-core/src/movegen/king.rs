//! King steps and castling.

use crate::attacks::KING_STEPS;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::knights::gen_steps;

/// King's home column.
const KING_COL: u8 = 4;

/// Generate the king's one-square steps.
pub(super) fn gen_king(position: &Position, sq: Square, king: Piece, moves: &mut Vec<Move>) {
    gen_steps(position.board(), sq, king, &KING_STEPS, moves);
}

/// Generate castling moves for the side to move.
///
/// A castle is added only when the right is still held, the king and rook
/// stand on their home squares, every square between them is empty, and
/// none of the king's origin, crossed or destination squares is attacked.
pub(super) fn gen_castles(position: &Position, moves: &mut Vec<Move>) {
    let us = position.side_to_move();
    let rights = position.castling();
    if !CastleSide::ALL.into_iter().any(|side| rights.has(us, side)) {
        return;
    }

    let board = position.board();
    let row = us.back_row();
    let king_sq = position.king_square(us);
    if king_sq != Square::new(row, KING_COL) || position.square_under_attack(king_sq) {
        return;
    }

    let king = Piece::new(us, PieceKind::King);
    let rook = Piece::new(us, PieceKind::Rook);

    for side in CastleSide::ALL {
        if !rights.has(us, side) || board.piece_at(Square::new(row, side.rook_col())) != Some(rook) {
            continue;
        }

        // Squares that must be empty, and the king's path ending on its destination.
        let (between, path): (&[u8], [u8; 2]) = match side {
            CastleSide::KingSide => (&[5, 6], [5, 6]),
            CastleSide::QueenSide => (&[1, 2, 3], [3, 2]),
        };

        let clear = between.iter().all(|&col| board.is_empty(Square::new(row, col)));
        let safe = clear
            && path
                .iter()
                .all(|&col| !position.square_under_attack(Square::new(row, col)));
        if safe {
            moves.push(Move::new_castle(king_sq, Square::new(row, path[1]), king));
        }
    }
}
