//! Move-selection strategies.

pub mod greedy;
pub mod minimax;
pub mod random;

use std::fmt;
use std::str::FromStr;

use gambit_core::{GameTree, Move};
use rand::Rng;

use crate::error::EngineError;

/// Default lookahead for [`Strategy::MinMax`].
pub const DEFAULT_DEPTH: u8 = 2;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move, `None` only when there was nothing to choose from.
    pub best_move: Option<Move>,
    /// Score of the chosen line from White's perspective.
    pub score: i32,
    /// Positions visited during the search.
    pub nodes: u64,
}

/// Tunables shared by the strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched by [`Strategy::MinMax`].
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// How a player picks its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniformly random legal move.
    Random,
    /// Two-ply material greedy search.
    Greedy,
    /// Fixed-depth minimax.
    MinMax,
}

impl Strategy {
    /// Pick a move from `moves`, the legal moves of `position`.
    ///
    /// `position` is restored before returning.
    pub fn choose<P, R>(
        self,
        position: &mut P,
        moves: &[Move],
        config: &SearchConfig,
        rng: &mut R,
    ) -> Option<Move>
    where
        P: GameTree + ?Sized,
        R: Rng + ?Sized,
    {
        match self {
            Strategy::Random => random::find_random_move(moves, rng),
            Strategy::Greedy => greedy::find_best_move(position, moves, rng),
            Strategy::MinMax => minimax::find_best_move_minimax(position, moves, config.depth),
        }
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "greedy" => Ok(Strategy::Greedy),
            "minimax" | "minmax" => Ok(Strategy::MinMax),
            _ => Err(EngineError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::MinMax => "minimax",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use gambit_core::Position;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("random".parse::<Strategy>().unwrap(), Strategy::Random);
        assert_eq!("Greedy".parse::<Strategy>().unwrap(), Strategy::Greedy);
        assert_eq!("minimax".parse::<Strategy>().unwrap(), Strategy::MinMax);
        assert_eq!("minmax".parse::<Strategy>().unwrap(), Strategy::MinMax);
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "negamax".parse::<Strategy>().unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownStrategy {
                name: "negamax".to_string()
            }
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for strategy in [Strategy::Random, Strategy::Greedy, Strategy::MinMax] {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn default_depth() {
        assert_eq!(SearchConfig::default().depth, DEFAULT_DEPTH);
    }

    #[test]
    fn every_strategy_picks_a_legal_move() {
        let mut pos = Position::new();
        let moves = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(7);
        let config = SearchConfig::default();
        for strategy in [Strategy::Random, Strategy::Greedy, Strategy::MinMax] {
            let mv = strategy.choose(&mut pos, &moves, &config, &mut rng).unwrap();
            assert!(moves.contains(&mv), "{strategy} chose {mv}");
        }
        assert!(pos.move_log().is_empty());
    }

    #[test]
    fn every_strategy_returns_none_without_moves() {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(7);
        let config = SearchConfig::default();
        for strategy in [Strategy::Random, Strategy::Greedy, Strategy::MinMax] {
            assert_eq!(strategy.choose(&mut pos, &[], &config, &mut rng), None);
        }
    }
}
