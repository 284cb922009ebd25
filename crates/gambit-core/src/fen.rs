//! FEN string parsing and serialization for [`Board`] and [`Position`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses the piece-placement field alone (e.g. `"4k3/8/8/8/8/8/8/4K3"`).
///
/// No structural validation is done here; see [`Board::validate`].
impl FromStr for Board {
    type Err = FenError;

    fn from_str(placement: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        // FEN lists rank 8 first, which is grid row 0.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or(FenError::InvalidPieceChar { character: c })?;
                    if col >= 8 {
                        return Err(FenError::BadRankLength {
                            row,
                            length: col + 1,
                        });
                    }
                    board.set(Square::new(row as u8, col as u8), Some(piece));
                    col += 1;
                }
            }

            if col != 8 {
                return Err(FenError::BadRankLength { row, length: col });
            }
        }

        Ok(board)
    }
}

/// Formats the piece-placement field.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            let mut empty_run = 0u8;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board: Board = fields[0].parse()?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_algebraic(fields[3]).map_err(|_| FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                })?,
            )
        };

        // Counters are validated but not tracked.
        fields[4]
            .parse::<u16>()
            .map_err(|_| FenError::InvalidMoveCounter {
                field: "halfmove clock",
                found: fields[4].to_string(),
            })?;
        fields[5]
            .parse::<u16>()
            .map_err(|_| FenError::InvalidMoveCounter {
                field: "fullmove number",
                found: fields[5].to_string(),
            })?;

        Position::from_parts(board, side_to_move, castling, en_passant)
    }
}

impl Position {
    /// Load a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        fen.parse()
    }

    /// Serialize to FEN. Move counters are written as `0 1`.
    pub fn to_fen(&self) -> String {
        let en_passant = self
            .en_passant()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {} 0 1",
            self.board(),
            self.side_to_move(),
            self.castling(),
            en_passant
        )
    }
}
