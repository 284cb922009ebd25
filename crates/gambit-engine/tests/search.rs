//! Strategy behaviour over whole games and searched positions.

use gambit_core::{GameTree, Position, Square};
use gambit_engine::{
    CHECKMATE, SearchConfig, Strategy, evaluate, find_best_move, find_best_move_minimax,
    find_random_move, material, minimax,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn play(position: &mut Position, moves: &[&str]) {
    for text in moves {
        let mv = position
            .parse_move(text)
            .unwrap()
            .unwrap_or_else(|| panic!("{text} is not legal"));
        position.make_move(mv);
    }
}

#[test]
fn material_follows_captures() {
    let mut pos = Position::new();
    assert_eq!(material(pos.board()), 0);
    play(&mut pos, &["e2e4", "d7d5", "e4d5"]);
    assert_eq!(material(pos.board()), 1);
    play(&mut pos, &["d8d5"]);
    assert_eq!(material(pos.board()), 0);
}

#[test]
fn fools_mate_evaluates_as_lost_for_white() {
    let mut pos = Position::new();
    play(&mut pos, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(pos.legal_moves().is_empty());
    assert_eq!(evaluate(&pos), -CHECKMATE);
}

#[test]
fn minimax_finds_fools_mate_for_black() {
    let mut pos = Position::new();
    play(&mut pos, &["f2f3", "e7e5", "g2g4"]);
    let moves = pos.legal_moves();
    let mv = find_best_move_minimax(&mut pos, &moves, 2).unwrap();
    assert_eq!((mv.source(), mv.dest()), (Square::D8, Square::H4));
}

#[test]
fn greedy_finds_fools_mate_for_black() {
    let mut pos = Position::new();
    play(&mut pos, &["f2f3", "e7e5", "g2g4"]);
    let moves = pos.legal_moves();
    let mut rng = StdRng::seed_from_u64(17);
    let mv = find_best_move(&mut pos, &moves, &mut rng).unwrap();
    assert_eq!((mv.source(), mv.dest()), (Square::D8, Square::H4));
}

#[test]
fn greedy_sees_the_recapture() {
    // Qxd5 wins a pawn but cxd5 wins the queen back.
    for seed in 0..8 {
        let mut pos = Position::from_fen("4k3/8/2p5/3p4/8/8/8/3QK3 w - - 0 1").unwrap();
        let moves = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(seed);
        let mv = find_best_move(&mut pos, &moves, &mut rng).unwrap();
        assert_ne!(
            (mv.source(), mv.dest()),
            (Square::D1, Square::D5),
            "seed {seed} took the defended pawn"
        );
    }
}

#[test]
fn greedy_prefers_the_undefended_pawn() {
    // Only the c6 pawn is loose: d5 is guarded by c6, c6 by nothing.
    for seed in 0..8 {
        let mut pos = Position::from_fen("4k3/8/2p5/3p4/8/8/8/2Q1K3 w - - 0 1").unwrap();
        let moves = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(seed);
        let mv = find_best_move(&mut pos, &moves, &mut rng).unwrap();
        assert_eq!((mv.source(), mv.dest()), (Square::C1, Square::C6), "seed {seed}");
    }
}

#[test]
fn minimax_avoids_hanging_the_queen() {
    // White's queen is attacked by a pawn; depth two must move it to safety.
    let mut pos = Position::from_fen("4k3/8/8/2p5/3Q4/8/8/4K3 w - - 0 1").unwrap();
    let moves = pos.legal_moves();
    let result = minimax(&mut pos, &moves, 2);
    assert!(result.score >= 9, "score {}", result.score);
}

#[test]
fn strategies_work_through_a_trait_object() {
    let mut pos = Position::new();
    let moves = pos.legal_moves();
    let tree: &mut dyn GameTree = &mut pos;
    let mut rng = StdRng::seed_from_u64(23);
    let config = SearchConfig { depth: 1 };
    let mv = Strategy::MinMax
        .choose(tree, &moves, &config, &mut rng)
        .unwrap();
    assert!(moves.contains(&mv));
}

#[test]
fn random_self_play_stays_consistent() {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..120 {
        let moves = pos.legal_moves();
        let Some(mv) = find_random_move(&moves, &mut rng) else {
            assert!(pos.is_checkmate() ^ pos.is_stalemate());
            break;
        };
        pos.make_move(mv);
        for color in [gambit_core::Color::White, gambit_core::Color::Black] {
            assert_eq!(pos.board().find_king(color), Some(pos.king_square(color)));
        }
    }
    let played = pos.move_log().len();
    for _ in 0..played {
        pos.undo_move();
    }
    assert_eq!(pos.to_fen(), Position::new().to_fen());
}

#[test]
fn greedy_against_minimax_plays_legal_moves() {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(99);
    let config = SearchConfig { depth: 1 };
    for ply in 0..16 {
        let moves = pos.legal_moves();
        let strategy = if ply % 2 == 0 {
            Strategy::Greedy
        } else {
            Strategy::MinMax
        };
        let Some(mv) = strategy.choose(&mut pos, &moves, &config, &mut rng) else {
            break;
        };
        assert!(moves.contains(&mv), "{strategy} chose illegal {mv}");
        assert_eq!(pos.move_log().len(), ply);
        pos.make_move(mv);
    }
}

#[test]
fn seeded_games_repeat() {
    let run = |seed: u64| {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..10 {
            let moves = pos.legal_moves();
            let Some(mv) = Strategy::Greedy.choose(&mut pos, &moves, &SearchConfig::default(), &mut rng)
            else {
                break;
            };
            pos.make_move(mv);
        }
        pos.move_log().to_vec()
    };
    assert_eq!(run(5), run(5));
}
