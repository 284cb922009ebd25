//! Board coordinates: `(row, col)` on the 8x8 grid.
//!
//! Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1).
//! Files a-h map to columns 0-7.

use std::fmt;
use std::str::FromStr;

use crate::error::SquareError;

/// A square on the board, addressed by grid row and column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and a column, both in `0..8`.
    ///
    /// Off-board coordinates are a programming error.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8, "square coordinates out of range");
        Square { row, col }
    }

    /// Create a square from signed coordinates, returning `None` when off the board.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Square> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Step by `(d_row, d_col)`, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the file letter (`'a'..='h'`).
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Return the rank digit (`'1'..='8'`).
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Result<Square, SquareError> {
        let invalid = || SquareError::Invalid {
            found: s.to_string(),
        };
        let &[file, rank] = s.as_bytes() else {
            return Err(invalid());
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::new(b'8' - rank, file - b'a'))
    }

    /// Iterate over all 64 squares, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Square::new(row, col)))
    }

    // Named square constants
    pub const A1: Square = Square::new(7, 0);
    pub const B1: Square = Square::new(7, 1);
    pub const C1: Square = Square::new(7, 2);
    pub const D1: Square = Square::new(7, 3);
    pub const E1: Square = Square::new(7, 4);
    pub const F1: Square = Square::new(7, 5);
    pub const G1: Square = Square::new(7, 6);
    pub const H1: Square = Square::new(7, 7);
    pub const A2: Square = Square::new(6, 0);
    pub const B2: Square = Square::new(6, 1);
    pub const C2: Square = Square::new(6, 2);
    pub const D2: Square = Square::new(6, 3);
    pub const E2: Square = Square::new(6, 4);
    pub const F2: Square = Square::new(6, 5);
    pub const G2: Square = Square::new(6, 6);
    pub const H2: Square = Square::new(6, 7);
    pub const A3: Square = Square::new(5, 0);
    pub const B3: Square = Square::new(5, 1);
    pub const C3: Square = Square::new(5, 2);
    pub const D3: Square = Square::new(5, 3);
    pub const E3: Square = Square::new(5, 4);
    pub const F3: Square = Square::new(5, 5);
    pub const G3: Square = Square::new(5, 6);
    pub const H3: Square = Square::new(5, 7);
    pub const A4: Square = Square::new(4, 0);
    pub const B4: Square = Square::new(4, 1);
    pub const C4: Square = Square::new(4, 2);
    pub const D4: Square = Square::new(4, 3);
    pub const E4: Square = Square::new(4, 4);
    pub const F4: Square = Square::new(4, 5);
    pub const G4: Square = Square::new(4, 6);
    pub const H4: Square = Square::new(4, 7);
    pub const A5: Square = Square::new(3, 0);
    pub const B5: Square = Square::new(3, 1);
    pub const C5: Square = Square::new(3, 2);
    pub const D5: Square = Square::new(3, 3);
    pub const E5: Square = Square::new(3, 4);
    pub const F5: Square = Square::new(3, 5);
    pub const G5: Square = Square::new(3, 6);
    pub const H5: Square = Square::new(3, 7);
    pub const A6: Square = Square::new(2, 0);
    pub const B6: Square = Square::new(2, 1);
    pub const C6: Square = Square::new(2, 2);
    pub const D6: Square = Square::new(2, 3);
    pub const E6: Square = Square::new(2, 4);
    pub const F6: Square = Square::new(2, 5);
    pub const G6: Square = Square::new(2, 6);
    pub const H6: Square = Square::new(2, 7);
    pub const A7: Square = Square::new(1, 0);
    pub const B7: Square = Square::new(1, 1);
    pub const C7: Square = Square::new(1, 2);
    pub const D7: Square = Square::new(1, 3);
    pub const E7: Square = Square::new(1, 4);
    pub const F7: Square = Square::new(1, 5);
    pub const G7: Square = Square::new(1, 6);
    pub const H7: Square = Square::new(1, 7);
    pub const A8: Square = Square::new(0, 0);
    pub const B8: Square = Square::new(0, 1);
    pub const C8: Square = Square::new(0, 2);
    pub const D8: Square = Square::new(0, 3);
    pub const E8: Square = Square::new(0, 4);
    pub const F8: Square = Square::new(0, 5);
    pub const G8: Square = Square::new(0, 6);
    pub const H8: Square = Square::new(0, 7);
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Square, SquareError> {
        Square::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn notation_maps_rank_to_row() {
        assert_eq!(Square::new(6, 4).to_string(), "e2");
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
    }

    #[test]
    fn named_constants() {
        assert_eq!(Square::E2, Square::new(6, 4));
        assert_eq!(Square::E4, Square::new(4, 4));
        assert_eq!(Square::A8, Square::new(0, 0));
        assert_eq!(Square::H1, Square::new(7, 7));
    }

    #[test]
    fn parse_algebraic() {
        assert_eq!("e2".parse::<Square>().unwrap(), Square::E2);
        assert_eq!("h8".parse::<Square>().unwrap(), Square::H8);
        for bad in ["", "e", "e9", "i1", "e22", "E2"] {
            assert!(bad.parse::<Square>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn every_square_parses_back() {
        for sq in Square::all() {
            assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
        }
        assert_eq!(Square::all().count(), Square::COUNT);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::E2.offset(-2, 0), Some(Square::E4));
        assert_eq!(Square::A1.offset(0, -1), None);
        assert_eq!(Square::H8.offset(-1, 0), None);
        assert_eq!(Square::try_new(8, 0), None);
    }
}
