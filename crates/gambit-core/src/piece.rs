//! A colored chess piece, the content of an occupied board cell.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Lowercase FEN letters, indexed by [`PieceKind::index()`].
const LETTERS: [char; PieceKind::COUNT] = ['p', 'n', 'b', 'r', 'q', 'k'];

const KINDS: [PieceKind; PieceKind::COUNT] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// A colored chess piece.
///
/// A board cell holds `Option<Piece>`; `None` is an empty cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceKind::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceKind::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceKind::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceKind::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceKind::Queen);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);

    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceKind::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceKind::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceKind::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceKind::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceKind::Queen);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);

    /// Create a piece from a color and a kind.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Parse a FEN letter: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let lower = c.to_ascii_lowercase();
        let kind = KINDS
            .into_iter()
            .find(|&kind| LETTERS[kind.index()] == lower)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return `true` if this piece is of `kind` and belongs to `color`.
    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Return the FEN letter for this piece.
    pub fn fen_char(self) -> char {
        let c = LETTERS[self.kind.index()];
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, "{}{}", color_prefix, LETTERS[self.kind.index()].to_ascii_uppercase())
    }
}
