//! Uniformly random move choice.

use gambit_core::Move;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Pick one of `moves` uniformly at random.
pub fn find_random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    let chosen = moves.choose(rng).copied();
    if let Some(mv) = chosen {
        debug!(best = %mv, candidates = moves.len(), "random move");
    }
    chosen
}

#[cfg(test)]
mod tests {
    use gambit_core::Position;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::find_random_move;

    #[test]
    fn empty_list_gives_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(find_random_move(&[], &mut rng), None);
    }

    #[test]
    fn picks_from_the_list() {
        let mut pos = Position::new();
        let moves = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let mv = find_random_move(&moves, &mut rng).unwrap();
            assert!(moves.contains(&mv));
        }
    }

    #[test]
    fn same_seed_same_choice() {
        let mut pos = Position::new();
        let moves = pos.legal_moves();
        let a = find_random_move(&moves, &mut StdRng::seed_from_u64(42));
        let b = find_random_move(&moves, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
