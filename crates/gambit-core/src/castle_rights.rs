//! Castling rights: four independent flags, one per color and side.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column of the rook that starts in this side's corner.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }
}

/// Castling rights snapshot.
///
/// Gameplay only ever clears a flag; a cleared flag comes back only when
/// the move that cleared it is undone.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    white_king_side: bool,
    black_king_side: bool,
    white_queen_side: bool,
    black_queen_side: bool,
}

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights {
        white_king_side: false,
        black_king_side: false,
        white_queen_side: false,
        black_queen_side: false,
    };

    /// All castling rights, as in the initial position.
    pub const ALL: CastleRights = CastleRights {
        white_king_side: true,
        black_king_side: true,
        white_queen_side: true,
        black_queen_side: true,
    };

    /// Return `true` if `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_king_side,
            (Color::White, CastleSide::QueenSide) => self.white_queen_side,
            (Color::Black, CastleSide::KingSide) => self.black_king_side,
            (Color::Black, CastleSide::QueenSide) => self.black_queen_side,
        }
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.white_king_side
            || self.black_king_side
            || self.white_queen_side
            || self.black_queen_side)
    }

    /// Return a copy with one right granted.
    #[must_use]
    pub fn with(mut self, color: Color, side: CastleSide) -> CastleRights {
        *self.flag_mut(color, side) = true;
        self
    }

    /// Return a copy with one right cleared.
    #[must_use]
    pub fn without(mut self, color: Color, side: CastleSide) -> CastleRights {
        *self.flag_mut(color, side) = false;
        self
    }

    /// Return a copy with both rights of `color` cleared.
    #[must_use]
    pub fn without_color(self, color: Color) -> CastleRights {
        self.without(color, CastleSide::KingSide)
            .without(color, CastleSide::QueenSide)
    }

    fn flag_mut(&mut self, color: Color, side: CastleSide) -> &mut bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => &mut self.white_king_side,
            (Color::White, CastleSide::QueenSide) => &mut self.white_queen_side,
            (Color::Black, CastleSide::KingSide) => &mut self.black_king_side,
            (Color::Black, CastleSide::QueenSide) => &mut self.black_queen_side,
        }
    }

    /// Parse the FEN castling field (e.g. `"KQkq"`, `"Kq"`, `"-"`).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            rights = match c {
                'K' => rights.with(Color::White, CastleSide::KingSide),
                'Q' => rights.with(Color::White, CastleSide::QueenSide),
                'k' => rights.with(Color::Black, CastleSide::KingSide),
                'q' => rights.with(Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
        }
        Ok(rights)
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        [
            (self.white_king_side, 'K'),
            (self.white_queen_side, 'Q'),
            (self.black_king_side, 'k'),
            (self.black_queen_side, 'q'),
        ]
        .into_iter()
        .filter_map(|(set, c)| set.then_some(c))
        .collect()
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        CastleRights::ALL
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
