//! Two-ply greedy search.
//!
//! For every candidate the opponent's best immediate reply is scored by
//! material, and the candidate that minimises that reply wins. Candidates
//! are shuffled first so equal scores break randomly.

use gambit_core::{GameTree, Move};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::SearchResult;
use crate::eval::material::material;
use crate::eval::{CHECKMATE, STALEMATE};

/// Pick the move whose best opponent reply scores lowest.
///
/// `position` is restored before returning.
pub fn find_best_move<P, R>(position: &mut P, moves: &[Move], rng: &mut R) -> Option<Move>
where
    P: GameTree + ?Sized,
    R: Rng + ?Sized,
{
    greedy(position, moves, rng).best_move
}

/// Greedy search returning the chosen move with its score and node count.
///
/// The score is the outcome of the opponent's best reply, from White's
/// perspective.
pub fn greedy<P, R>(position: &mut P, moves: &[Move], rng: &mut R) -> SearchResult
where
    P: GameTree + ?Sized,
    R: Rng + ?Sized,
{
    let turn = if position.white_to_move() { 1 } else { -1 };
    let mut candidates = moves.to_vec();
    candidates.shuffle(rng);

    let mut nodes = 0u64;
    let mut best: Option<(Move, i32)> = None;

    for mv in candidates {
        position.make_move(mv);
        nodes += 1;
        let opponent_max = best_reply(position, turn, &mut nodes);
        position.undo_move();

        // First candidate is always taken so a move exists even when every
        // line loses.
        if best.is_none_or(|(_, min_max)| opponent_max < min_max) {
            best = Some((mv, opponent_max));
        }
    }

    let result = SearchResult {
        best_move: best.map(|(mv, _)| mv),
        score: best.map_or(0, |(_, opponent_max)| -turn * opponent_max),
        nodes,
    };
    if let Some(mv) = result.best_move {
        debug!(best = %mv, score = result.score, nodes, "greedy search");
    }
    result
}

/// Score of the opponent's best reply, from the opponent's perspective.
fn best_reply<P: GameTree + ?Sized>(position: &mut P, turn: i32, nodes: &mut u64) -> i32 {
    let replies = position.legal_moves();
    if position.is_stalemate() {
        return STALEMATE;
    }
    if position.is_checkmate() {
        return -CHECKMATE;
    }

    let mut opponent_max = -CHECKMATE;
    for reply in replies {
        position.make_move(reply);
        *nodes += 1;
        position.legal_moves();
        let score = if position.is_checkmate() {
            CHECKMATE
        } else if position.is_stalemate() {
            STALEMATE
        } else {
            -turn * material(position.board())
        };
        position.undo_move();
        opponent_max = opponent_max.max(score);
    }
    opponent_max
}

#[cfg(test)]
mod tests {
    use gambit_core::{Position, Square};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{find_best_move, greedy};

    #[test]
    fn takes_the_undefended_queen() {
        let mut pos = Position::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
        let moves = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(3);
        let mv = find_best_move(&mut pos, &moves, &mut rng).unwrap();
        assert_eq!((mv.source(), mv.dest()), (Square::D2, Square::D5));
    }

    #[test]
    fn delivers_mate_in_one() {
        let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let moves = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(3);
        let mv = find_best_move(&mut pos, &moves, &mut rng).unwrap();
        assert_eq!((mv.source(), mv.dest()), (Square::A1, Square::A8));
    }

    #[test]
    fn black_captures_too() {
        let mut pos = Position::from_fen("4k3/3r4/8/8/3Q4/8/8/4K3 b - - 0 1").unwrap();
        let moves = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(5);
        let result = greedy(&mut pos, &moves, &mut rng);
        let mv = result.best_move.unwrap();
        assert_eq!((mv.source(), mv.dest()), (Square::D7, Square::D4));
        assert_eq!(result.score, -5);
    }

    #[test]
    fn position_is_restored() {
        let mut pos = Position::new();
        let before = pos.to_fen();
        let moves = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(9);
        let result = greedy(&mut pos, &moves, &mut rng);
        assert!(result.best_move.is_some());
        assert_eq!(result.nodes, 20 + 400);
        assert_eq!(pos.to_fen(), before);
        assert!(pos.move_log().is_empty());
    }

    #[test]
    fn same_seed_same_choice() {
        let mut pos = Position::new();
        let moves = pos.legal_moves();
        let a = find_best_move(&mut pos, &moves, &mut StdRng::seed_from_u64(11));
        let b = find_best_move(&mut pos, &moves, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn all_equal_scores_still_yield_a_move() {
        // Bare kings: every reply scores zero, so no candidate beats the first.
        let mut pos = Position::from_fen("k7/8/8/8/8/8/8/7K b - - 0 1").unwrap();
        let moves = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(13);
        let result = greedy(&mut pos, &moves, &mut rng);
        assert!(moves.contains(&result.best_move.unwrap()));
        assert_eq!(result.score, 0);
    }
}
