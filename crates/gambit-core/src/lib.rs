//! Chess rules: board representation, reversible make/undo, attack
//! detection and legal move generation.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game_tree;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError, NotationError, SquareError};
pub use fen::STARTING_FEN;
pub use game_tree::GameTree;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use square::Square;
