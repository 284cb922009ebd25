//! Move generation: pseudo-legal candidates per piece kind, filtered to
//! legal moves by making each one and testing the mover's king.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::debug;

use crate::attacks::{DIAGONALS, KNIGHT_STEPS, ORTHOGONALS};
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::king::{gen_castles, gen_king};
use self::knights::gen_steps;
use self::pawns::gen_pawn;
use self::sliders::gen_rays;

impl Position {
    /// Generate every move the side to move could make ignoring check,
    /// castles included. Order is unspecified.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        let board = self.board();
        let en_passant = self.en_passant();

        for (sq, piece) in board.pieces_of(self.side_to_move()) {
            match piece.kind() {
                PieceKind::Pawn => gen_pawn(board, sq, piece, en_passant, &mut moves),
                PieceKind::Knight => gen_steps(board, sq, piece, &KNIGHT_STEPS, &mut moves),
                PieceKind::Bishop => gen_rays(board, sq, piece, &DIAGONALS, &mut moves),
                PieceKind::Rook => gen_rays(board, sq, piece, &ORTHOGONALS, &mut moves),
                PieceKind::Queen => {
                    gen_rays(board, sq, piece, &ORTHOGONALS, &mut moves);
                    gen_rays(board, sq, piece, &DIAGONALS, &mut moves);
                }
                PieceKind::King => gen_king(self, sq, piece, &mut moves),
            }
        }

        gen_castles(self, &mut moves);
        moves
    }

    /// Generate the legal moves for the side to move and refresh the
    /// checkmate/stalemate flags. Order is unspecified.
    ///
    /// Call again after every make or undo before reading the flags.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let us = self.side_to_move();
        let en_passant = self.en_passant();
        let castling = self.castling();

        let mut moves = self.pseudo_legal_moves();
        moves.retain(|&mv| {
            self.make_move(mv);
            let exposed = self.board().is_square_attacked(self.king_square(us), !us);
            self.undo_move();
            !exposed
        });

        debug_assert_eq!(self.en_passant(), en_passant, "probing changed the en passant target");
        debug_assert_eq!(self.castling(), castling, "probing changed castling rights");

        if moves.is_empty() {
            let in_check = self.in_check();
            self.set_terminal_flags(in_check, !in_check);
            debug!(
                side = %us,
                checkmate = in_check,
                stalemate = !in_check,
                "no legal moves"
            );
        } else {
            self.set_terminal_flags(false, false);
        }

        moves
    }
}
