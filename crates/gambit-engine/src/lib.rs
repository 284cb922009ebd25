//! Evaluation and move-selection strategies for gambit.

pub mod error;
pub mod eval;
pub mod search;

pub use error::EngineError;
pub use eval::material::{material, piece_value};
pub use eval::{CHECKMATE, STALEMATE, evaluate};
pub use search::greedy::find_best_move;
pub use search::minimax::{find_best_move_minimax, minimax};
pub use search::random::find_random_move;
pub use search::{DEFAULT_DEPTH, SearchConfig, SearchResult, Strategy};
