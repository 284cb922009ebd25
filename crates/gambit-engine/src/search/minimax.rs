//! Fixed-depth minimax.
//!
//! White maximises and Black minimises the White-perspective score. Leaves
//! at depth zero are scored by material alone; a node with no legal moves
//! is scored by [`evaluate`], so mates and stalemates are seen only when
//! they occur inside the search horizon.

use gambit_core::{GameTree, Move};
use tracing::debug;

use super::SearchResult;
use crate::eval::evaluate;
use crate::eval::material::material;

/// Pick the best of `moves` by searching `depth` plies.
///
/// `position` is restored before returning.
pub fn find_best_move_minimax<P>(position: &mut P, moves: &[Move], depth: u8) -> Option<Move>
where
    P: GameTree + ?Sized,
{
    minimax(position, moves, depth).best_move
}

/// Minimax search returning the chosen move with its score and node count.
///
/// The root always searches at least one ply, so a non-empty `moves`
/// always yields a move. Ties keep the earliest move in `moves`.
pub fn minimax<P>(position: &mut P, moves: &[Move], depth: u8) -> SearchResult
where
    P: GameTree + ?Sized,
{
    let depth = depth.max(1);
    let maximizing = position.white_to_move();
    let mut nodes = 0u64;
    let mut best: Option<(Move, i32)> = None;

    for &mv in moves {
        position.make_move(mv);
        let score = search(position, depth - 1, &mut nodes);
        position.undo_move();

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    let result = SearchResult {
        best_move: best.map(|(mv, _)| mv),
        score: best.map_or(0, |(_, score)| score),
        nodes,
    };
    if let Some(mv) = result.best_move {
        debug!(best = %mv, score = result.score, nodes, depth, "minimax search");
    }
    result
}

fn search<P: GameTree + ?Sized>(position: &mut P, depth: u8, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return material(position.board());
    }

    let moves = position.legal_moves();
    if moves.is_empty() {
        return evaluate(position);
    }

    let maximizing = position.white_to_move();
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        position.make_move(mv);
        let score = search(position, depth - 1, nodes);
        position.undo_move();
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
