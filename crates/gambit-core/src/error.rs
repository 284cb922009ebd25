//! Error types for notation parsing, FEN parsing, and board validation.

/// A square name that is not a file `a`-`h` followed by a rank `1`-`8`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    #[error("invalid square: \"{found}\"")]
    Invalid {
        /// The text that failed to parse.
        found: String,
    },
}

/// Move text that is not a pair of squares such as `"e2e4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The text is not four characters long.
    #[error("expected a square pair like \"e2e4\", found \"{found}\"")]
    WrongLength {
        /// The text that failed to parse.
        found: String,
    },
    /// One of the two squares is malformed.
    #[error("invalid move notation: {source}")]
    BadSquare {
        /// The underlying square error.
        #[from]
        source: SquareError,
    },
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {row} describes {length} squares, expected 8")]
    BadRankLength {
        /// Grid row of the offending rank (0 = rank 8).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, NotationError, SquareError};

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 6 FEN fields, found 4");
    }

    #[test]
    fn fen_error_from_board_error() {
        let fen_err: FenError = BoardError::PawnsOnBackRank.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
        assert_eq!(format!("{fen_err}"), "invalid board: pawns found on back rank");
    }

    #[test]
    fn notation_error_wraps_square_error() {
        let err: NotationError = SquareError::Invalid {
            found: "z9".to_string(),
        }
        .into();
        assert_eq!(format!("{err}"), "invalid move notation: invalid square: \"z9\"");
    }
}
