//! The narrow interface search strategies walk.

use crate::board::Board;
use crate::chess_move::Move;
use crate::position::Position;

/// A game state that can be explored depth-first by make/undo.
///
/// [`Position`] mutates one board in place; another implementation (for
/// example a persistent board) can stand in without changing the search.
pub trait GameTree {
    /// Legal moves for the side to move; refreshes the end-of-game flags.
    fn legal_moves(&mut self) -> Vec<Move>;

    /// Apply a move taken from [`GameTree::legal_moves`].
    fn make_move(&mut self, mv: Move);

    /// Take back the last move.
    fn undo_move(&mut self);

    /// Flag set by the last [`GameTree::legal_moves`] call.
    fn is_checkmate(&self) -> bool;

    /// Flag set by the last [`GameTree::legal_moves`] call.
    fn is_stalemate(&self) -> bool;

    fn white_to_move(&self) -> bool;

    fn board(&self) -> &Board;
}

impl GameTree for Position {
    fn legal_moves(&mut self) -> Vec<Move> {
        Position::legal_moves(self)
    }

    fn make_move(&mut self, mv: Move) {
        Position::make_move(self, mv);
    }

    fn undo_move(&mut self) {
        Position::undo_move(self);
    }

    fn is_checkmate(&self) -> bool {
        Position::is_checkmate(self)
    }

    fn is_stalemate(&self) -> bool {
        Position::is_stalemate(self)
    }

    fn white_to_move(&self) -> bool {
        Position::white_to_move(self)
    }

    fn board(&self) -> &Board {
        Position::board(self)
    }
}
