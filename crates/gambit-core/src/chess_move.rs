//! Move representation.

use std::fmt;

use crate::board::Board;
use crate::error::NotationError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The category of a chess move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    /// Quiet move or ordinary capture.
    Normal = 0,
    /// Pawn reaching the far rank. Always promotes to a queen.
    Promotion = 1,
    /// Pawn capturing a pawn that just advanced two squares.
    EnPassant = 2,
    /// King moving two squares toward a rook.
    Castling = 3,
}

/// An immutable chess move.
///
/// Equality is structural: two moves built separately compare equal when
/// their squares, moving piece, captured piece and kind all agree. That lets
/// a move built from user input be matched against the legal-move list.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Create a quiet move or an ordinary capture.
    pub const fn new(
        source: Square,
        dest: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Move {
        Move {
            source,
            dest,
            piece_moved,
            piece_captured,
            kind: MoveKind::Normal,
        }
    }

    /// Create a pawn move onto the far rank.
    pub const fn new_promotion(
        source: Square,
        dest: Square,
        pawn: Piece,
        piece_captured: Option<Piece>,
    ) -> Move {
        Move {
            source,
            dest,
            piece_moved: pawn,
            piece_captured,
            kind: MoveKind::Promotion,
        }
    }

    /// Create an en passant capture. `captured` is the pawn removed from
    /// the source row and destination column.
    pub const fn new_en_passant(source: Square, dest: Square, pawn: Piece, captured: Piece) -> Move {
        Move {
            source,
            dest,
            piece_moved: pawn,
            piece_captured: Some(captured),
            kind: MoveKind::EnPassant,
        }
    }

    /// Create a castling move from the king's source and destination squares.
    pub const fn new_castle(king_src: Square, king_dst: Square, king: Piece) -> Move {
        Move {
            source: king_src,
            dest: king_dst,
            piece_moved: king,
            piece_captured: None,
            kind: MoveKind::Castling,
        }
    }

    /// Build the move a piece on `source` would make by going to `dest`,
    /// reading the pieces involved from `board`.
    ///
    /// The kind is inferred the same way the generator assigns it, so the
    /// result equals the generated move whenever the move is legal. Returns
    /// `None` if `source` is empty. The board is not modified.
    pub fn from_board(board: &Board, source: Square, dest: Square) -> Option<Move> {
        let piece = board.piece_at(source)?;
        let target = board.piece_at(dest);
        let mv = match piece.kind() {
            PieceKind::Pawn if dest.row() == piece.color().promotion_row() => {
                Move::new_promotion(source, dest, piece, target)
            }
            PieceKind::Pawn if source.col() != dest.col() && target.is_none() => {
                let passed = Square::new(source.row(), dest.col());
                match board.piece_at(passed) {
                    Some(captured) => Move::new_en_passant(source, dest, piece, captured),
                    None => Move::new(source, dest, piece, None),
                }
            }
            PieceKind::King if source.row() == dest.row() && source.col().abs_diff(dest.col()) == 2 => {
                Move::new_castle(source, dest, piece)
            }
            _ => Move::new(source, dest, piece, target),
        };
        Some(mv)
    }

    /// Split `"e2e4"`-style text into its two squares.
    pub fn parse_squares(text: &str) -> Result<(Square, Square), NotationError> {
        if text.len() != 4 || !text.is_ascii() {
            return Err(NotationError::WrongLength {
                found: text.to_string(),
            });
        }
        let (from, to) = text.split_at(2);
        Ok((from.parse()?, to.parse()?))
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    #[inline]
    pub const fn piece_moved(self) -> Piece {
        self.piece_moved
    }

    /// The captured piece, if any. For en passant this is the pawn taken,
    /// not the content of the (empty) destination square.
    #[inline]
    pub const fn piece_captured(self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn is_pawn_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion)
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castling)
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square of the pawn removed by an en passant capture.
    #[inline]
    pub const fn en_passant_victim(self) -> Square {
        Square::new(self.source.row(), self.dest.col())
    }

    /// Return the square-pair notation, e.g. `"e2e4"`.
    pub fn to_notation(self) -> String {
        format!("{}{}", self.source, self.dest)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?} kind={:?}", self, self.piece_moved, self.kind)?;
        if let Some(captured) = self.piece_captured {
            write!(f, " x{captured:?}")?;
        }
        write!(f, ")")
    }
}
