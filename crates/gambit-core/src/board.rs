//! The 8x8 piece grid.

use std::fmt;
use std::ops::Index;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement on an 8x8 grid.
///
/// `grid[0]` is Black's back rank, `grid[7]` White's.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board { grid: [[None; 8]; 8] }
    }

    /// Return the standard starting arrangement.
    pub fn starting_position() -> Board {
        const BACK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in BACK.into_iter().enumerate() {
                board.grid[color.back_row() as usize][col] = Some(Piece::new(color, kind));
                board.grid[color.pawn_row() as usize][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    /// Return `true` if `sq` holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.grid[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Read-only view of the grid, row 0 first, for rendering.
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.grid
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Scan for the king of `color`.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Validate the structural integrity of the board and return the king
    /// squares, indexed by [`Color::index()`].
    pub fn validate(&self) -> Result<[Square; Color::COUNT], BoardError> {
        let mut kings = [Square::A1; Color::COUNT];
        for color in Color::ALL {
            let found: Vec<Square> = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .map(|(sq, _)| sq)
                .collect();
            let &[king] = found.as_slice() else {
                let color_name = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount {
                    color: color_name,
                    count: found.len(),
                });
            };
            kings[color.index()] = king;
        }

        let pawn_on_back_rank = self.pieces().any(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(kings)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, sq: Square) -> &Option<Piece> {
        &self.grid[sq.row() as usize][sq.col() as usize]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.grid.iter().enumerate() {
            write!(f, "{}  ", 8 - row)?;
            for (col, cell) in cells.iter().enumerate() {
                let c = cell.map_or('.', Piece::fen_char);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
