//! Mutable game state with reversible make/undo.
//!
//! A single [`Position`] is walked depth-first by search: every
//! [`Position::make_move`] is paired with an [`Position::undo_move`] that
//! restores board, side to move, king squares, castling rights and the en
//! passant target exactly.

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{FenError, NotationError};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Complete game state: board, turn, history and derived end-of-game flags.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    /// Moves played so far; doubles as the undo stack.
    move_log: Vec<Move>,
    /// Cached king squares, indexed by [`Color::index()`].
    king_squares: [Square; Color::COUNT],
    castling: CastleRights,
    /// One snapshot per ply plus the initial one; the top equals `castling`.
    castle_log: Vec<CastleRights>,
    en_passant: Option<Square>,
    /// One entry per ply plus the initial one; the top equals `en_passant`.
    en_passant_log: Vec<Option<Square>>,
    checkmate: bool,
    stalemate: bool,
}

impl Position {
    /// Start a new game from the standard initial arrangement.
    pub fn new() -> Position {
        Position {
            board: Board::starting_position(),
            side_to_move: Color::White,
            move_log: Vec::new(),
            king_squares: [Square::E1, Square::E8],
            castling: CastleRights::ALL,
            castle_log: vec![CastleRights::ALL],
            en_passant: None,
            en_passant_log: vec![None],
            checkmate: false,
            stalemate: false,
        }
    }

    /// Build a position from a set-up board. Fails unless each side has
    /// exactly one king, no pawn stands on a back rank, and the en passant
    /// target is empty with the opponent's just-advanced pawn behind it.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
    ) -> Result<Position, FenError> {
        let king_squares = board.validate()?;
        if let Some(target) = en_passant
            && !en_passant_target_fits(&board, side_to_move, target)
        {
            return Err(FenError::InvalidEnPassant {
                found: target.to_string(),
            });
        }
        Ok(Position {
            board,
            side_to_move,
            move_log: Vec::new(),
            king_squares,
            castling,
            castle_log: vec![castling],
            en_passant,
            en_passant_log: vec![en_passant],
            checkmate: false,
            stalemate: false,
        })
    }

    /// Discard the game in progress and return to the initial arrangement.
    pub fn reset(&mut self) {
        *self = Position::new();
    }

    /// Read-only view of the board for rendering and evaluation.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Return the cached square of `color`'s king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Square a pawn may capture into this ply, if the last move was a
    /// two-square pawn advance.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// `true` if the last legal-move pass found the side to move mated.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// `true` if the last legal-move pass found no moves and no check.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    pub(crate) fn set_terminal_flags(&mut self, checkmate: bool, stalemate: bool) {
        self.checkmate = checkmate;
        self.stalemate = stalemate;
    }

    /// Apply `mv`. The move is trusted to come from the legal-move list.
    pub fn make_move(&mut self, mv: Move) {
        let us = mv.piece_moved().color();
        debug_assert_eq!(us, self.side_to_move, "move {mv} played out of turn");
        trace!(mv = %mv, "make");

        let placed = if mv.is_pawn_promotion() {
            Piece::new(us, PieceKind::PROMOTION)
        } else {
            mv.piece_moved()
        };
        self.board.set(mv.source(), None);
        self.board.set(mv.dest(), Some(placed));

        if mv.is_en_passant() {
            self.board.set(mv.en_passant_victim(), None);
        }

        if mv.is_castle() {
            let (rook_src, rook_dst) = castle_rook_squares(mv.dest());
            let rook = self.board.piece_at(rook_src);
            self.board.set(rook_src, None);
            self.board.set(rook_dst, rook);
        }

        if mv.piece_moved().kind() == PieceKind::King {
            self.king_squares[us.index()] = mv.dest();
        }

        self.en_passant = double_push_target(mv);
        self.en_passant_log.push(self.en_passant);

        self.castling = revoke_castle_rights(self.castling, mv);
        self.castle_log.push(self.castling);

        self.move_log.push(mv);
        self.side_to_move = !self.side_to_move;
    }

    /// Take back the last move. Does nothing when no move has been played.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        trace!(mv = %mv, "undo");
        let us = mv.piece_moved().color();
        self.side_to_move = us;

        self.board.set(mv.source(), Some(mv.piece_moved()));
        if mv.is_en_passant() {
            self.board.set(mv.dest(), None);
            self.board.set(mv.en_passant_victim(), mv.piece_captured());
        } else {
            self.board.set(mv.dest(), mv.piece_captured());
        }

        if mv.is_castle() {
            let (rook_src, rook_dst) = castle_rook_squares(mv.dest());
            let rook = self.board.piece_at(rook_dst);
            self.board.set(rook_dst, None);
            self.board.set(rook_src, rook);
        }

        if mv.piece_moved().kind() == PieceKind::King {
            self.king_squares[us.index()] = mv.source();
        }

        self.en_passant_log.pop();
        self.en_passant = *self
            .en_passant_log
            .last()
            .expect("en passant log keeps its initial entry");

        self.castle_log.pop();
        self.castling = *self
            .castle_log
            .last()
            .expect("castle log keeps its initial snapshot");
    }

    /// Find the legal move from `source` to `dest`, if there is one.
    ///
    /// Runs a legal-move pass, so the checkmate/stalemate flags are refreshed.
    pub fn find_legal_move(&mut self, source: Square, dest: Square) -> Option<Move> {
        let candidate = Move::from_board(&self.board, source, dest)?;
        self.legal_moves().into_iter().find(|mv| *mv == candidate)
    }

    /// Parse `"e2e4"`-style text and look it up among the legal moves.
    ///
    /// Malformed text is an error; well-formed but illegal text is `Ok(None)`.
    pub fn parse_move(&mut self, text: &str) -> Result<Option<Move>, NotationError> {
        let (source, dest) = Move::parse_squares(text)?;
        Ok(self.find_legal_move(source, dest))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// An en passant target sits on the row the opponent's pawn skipped, is
/// empty, and has that pawn directly behind it.
fn en_passant_target_fits(board: &Board, side_to_move: Color, target: Square) -> bool {
    let them = !side_to_move;
    let skipped_row = them.pawn_row() as i8 + them.pawn_step();
    target.row() as i8 == skipped_row
        && board.is_empty(target)
        && target
            .offset(them.pawn_step(), 0)
            .and_then(|sq| board.piece_at(sq))
            .is_some_and(|piece| piece.is(them, PieceKind::Pawn))
}

/// Rook source and destination for a castle landing the king on `king_dst`.
fn castle_rook_squares(king_dst: Square) -> (Square, Square) {
    let row = king_dst.row();
    let col = king_dst.col();
    if col == 6 {
        (Square::new(row, col + 1), Square::new(row, col - 1))
    } else {
        (Square::new(row, col - 2), Square::new(row, col + 1))
    }
}

/// The square skipped by a two-square pawn advance, if `mv` is one.
fn double_push_target(mv: Move) -> Option<Square> {
    let (src, dst) = (mv.source(), mv.dest());
    if mv.piece_moved().kind() == PieceKind::Pawn && src.row().abs_diff(dst.row()) == 2 {
        Some(Square::new((src.row() + dst.row()) / 2, src.col()))
    } else {
        None
    }
}

/// Which castling right a rook standing on `sq` guards for `color`.
fn corner_side(color: Color, sq: Square) -> Option<CastleSide> {
    if sq.row() != color.back_row() {
        return None;
    }
    CastleSide::ALL.into_iter().find(|side| side.rook_col() == sq.col())
}

fn revoke_castle_rights(rights: CastleRights, mv: Move) -> CastleRights {
    let mover = mv.piece_moved();
    let mut rights = match mover.kind() {
        PieceKind::King => rights.without_color(mover.color()),
        PieceKind::Rook => match corner_side(mover.color(), mv.source()) {
            Some(side) => rights.without(mover.color(), side),
            None => rights,
        },
        _ => rights,
    };

    // A rook taken on its corner can no longer castle either.
    if let Some(captured) = mv.piece_captured()
        && captured.kind() == PieceKind::Rook
        && let Some(side) = corner_side(captured.color(), mv.dest())
    {
        rights = rights.without(captured.color(), side);
    }
    rights
}
