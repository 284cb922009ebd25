//! Material balance evaluation.
//!
//! All scores are from White's perspective (positive = White ahead).

use gambit_core::{Board, PieceKind};

/// Piece values indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   | 1     |
/// | Knight | 3     |
/// | Bishop | 3     |
/// | Rook   | 5     |
/// | Queen  | 10    |
/// | King   | 0     |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [1, 3, 3, 5, 10, 0];

/// Return the value of a piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    MATERIAL_VALUE[kind.index()]
}

/// Sum of piece values, White's pieces positive and Black's negative.
pub fn material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| piece.color().sign() * piece_value(piece.kind()))
        .sum()
}
