//! Side colors and the board geometry that depends on them.

use std::fmt;
use std::ops::Not;

/// A side: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn push. White moves toward row 0.
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this side's pawns start and may double-push.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks in the initial setup.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row on which this side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.flip().back_row()
    }

    /// `+1` for White, `-1` for Black; signs material from White's view.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn flip_and_not() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(!!Color::White, Color::White);
    }

    #[test]
    fn pawn_geometry() {
        assert_eq!(Color::White.pawn_step(), -1);
        assert_eq!(Color::Black.pawn_step(), 1);
        assert_eq!(Color::White.pawn_row(), 6);
        assert_eq!(Color::Black.pawn_row(), 1);
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.promotion_row(), 7);
    }

    #[test]
    fn back_rows_are_opposite_edges() {
        assert_eq!(Color::White.back_row(), 7);
        assert_eq!(Color::Black.back_row(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "w");
        assert_eq!(format!("{}", Color::Black), "b");
    }
}
