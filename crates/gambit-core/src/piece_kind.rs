//! Piece kinds.

/// The kind of a chess piece, without color information.
///
/// Declaration order is the index order of kind-indexed tables such as
/// material values: pawn first, king last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Length of a kind-indexed table.
    pub const COUNT: usize = 6;

    /// What a pawn becomes on the far rank. Under-promotion is not offered.
    pub const PROMOTION: PieceKind = PieceKind::Queen;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn king_is_the_last_table_slot() {
        assert_eq!(PieceKind::Pawn.index(), 0);
        assert_eq!(PieceKind::King.index(), PieceKind::COUNT - 1);
    }
}
