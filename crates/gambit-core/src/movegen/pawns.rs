//! Pawn pushes, captures, en passant and promotion.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate pseudo-legal moves for the pawn on `sq`.
pub(super) fn gen_pawn(
    board: &Board,
    sq: Square,
    pawn: Piece,
    en_passant: Option<Square>,
    moves: &mut Vec<Move>,
) {
    let us = pawn.color();
    let step = us.pawn_step();
    let to = |dest: Square, captured: Option<Piece>| {
        if dest.row() == us.promotion_row() {
            Move::new_promotion(sq, dest, pawn, captured)
        } else {
            Move::new(sq, dest, pawn, captured)
        }
    };

    if let Some(one) = sq.offset(step, 0)
        && board.is_empty(one)
    {
        moves.push(to(one, None));
        if sq.row() == us.pawn_row()
            && let Some(two) = sq.offset(2 * step, 0)
            && board.is_empty(two)
        {
            moves.push(Move::new(sq, two, pawn, None));
        }
    }

    for dc in [-1, 1] {
        let Some(target) = sq.offset(step, dc) else {
            continue;
        };
        match board.piece_at(target) {
            Some(victim) if victim.color() != us => moves.push(to(target, Some(victim))),
            None if en_passant == Some(target) => {
                let passed = Square::new(sq.row(), target.col());
                if let Some(victim) = board.piece_at(passed)
                    && victim.is(!us, PieceKind::Pawn)
                {
                    moves.push(Move::new_en_passant(sq, target, pawn, victim));
                }
            }
            _ => {}
        }
    }
}
