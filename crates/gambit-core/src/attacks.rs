//! Attack detection: is a square reachable by a capture of the other side?

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Knight jumps as `(d_row, d_col)`.
pub(crate) const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps as `(d_row, d_col)`.
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rook ray directions.
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Bishop ray directions.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Return `true` if any piece of `by_color` could capture on `sq`.
    ///
    /// Works backwards from the target: each piece pattern is cast from `sq`
    /// and checked for an attacker of the matching kind. Pawns attack their
    /// forward diagonals whether or not the square is occupied; pawn pushes
    /// and castling never attack.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        let holds = |target: Option<Square>, kinds: &[PieceKind]| {
            target
                .and_then(|t| self.piece_at(t))
                .is_some_and(|p| p.color() == by_color && kinds.contains(&p.kind()))
        };

        if KNIGHT_STEPS
            .iter()
            .any(|&(dr, dc)| holds(sq.offset(dr, dc), &[PieceKind::Knight]))
        {
            return true;
        }

        if KING_STEPS
            .iter()
            .any(|&(dr, dc)| holds(sq.offset(dr, dc), &[PieceKind::King]))
        {
            return true;
        }

        // An attacking pawn sits one step behind `sq` from its own point of view.
        let behind = -by_color.pawn_step();
        if [-1, 1]
            .iter()
            .any(|&dc| holds(sq.offset(behind, dc), &[PieceKind::Pawn]))
        {
            return true;
        }

        let ray_hits = |dirs: &[(i8, i8)], kinds: &[PieceKind]| {
            dirs.iter()
                .any(|&(dr, dc)| holds(self.first_piece_along(sq, dr, dc), kinds))
        };

        ray_hits(&ORTHOGONALS, &[PieceKind::Rook, PieceKind::Queen])
            || ray_hits(&DIAGONALS, &[PieceKind::Bishop, PieceKind::Queen])
    }

    /// Walk from `from` in direction `(dr, dc)` and return the first occupied square.
    fn first_piece_along(&self, from: Square, dr: i8, dc: i8) -> Option<Square> {
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            if !self.is_empty(sq) {
                return Some(sq);
            }
            cur = sq.offset(dr, dc);
        }
        None
    }
}

impl Position {
    /// Return `true` if the side not to move attacks `sq`.
    ///
    /// A read-only probe: neither the side to move nor the move log changes.
    pub fn square_under_attack(&self, sq: Square) -> bool {
        self.board().is_square_attacked(sq, !self.side_to_move())
    }

    /// Return `true` if the side to move is in check.
    pub fn in_check(&self) -> bool {
        self.square_under_attack(self.king_square(self.side_to_move()))
    }
}
