use std::env;

use anyhow::{Context, Result};
use gambit_core::Position;
use gambit_engine::{DEFAULT_DEPTH, SearchConfig, Strategy, evaluate};
use tracing::info;

const DEFAULT_MAX_PLIES: usize = 200;

/// Command line: `gambit [white] [black] [max-plies] [depth]`.
struct Options {
    white: Strategy,
    black: Strategy,
    max_plies: usize,
    config: SearchConfig,
}

impl Options {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
        let white = match args.next() {
            Some(name) => name.parse::<Strategy>().context("white strategy")?,
            None => Strategy::Greedy,
        };
        let black = match args.next() {
            Some(name) => name.parse::<Strategy>().context("black strategy")?,
            None => Strategy::MinMax,
        };
        let max_plies = match args.next() {
            Some(text) => text
                .parse()
                .with_context(|| format!("max plies \"{text}\" is not a number"))?,
            None => DEFAULT_MAX_PLIES,
        };
        let depth = match args.next() {
            Some(text) => text
                .parse()
                .with_context(|| format!("depth \"{text}\" is not a number"))?,
            None => DEFAULT_DEPTH,
        };
        Ok(Options {
            white,
            black,
            max_plies,
            config: SearchConfig { depth },
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let options = Options::from_args(env::args().skip(1))?;
    info!(
        white = %options.white,
        black = %options.black,
        max_plies = options.max_plies,
        depth = options.config.depth,
        "gambit starting"
    );

    let mut position = Position::new();
    let mut rng = rand::rng();

    for ply in 0..options.max_plies {
        let moves = position.legal_moves();
        let strategy = if position.white_to_move() {
            options.white
        } else {
            options.black
        };
        let Some(mv) = strategy.choose(&mut position, &moves, &options.config, &mut rng) else {
            break;
        };
        info!(ply = ply + 1, side = %position.side_to_move(), %strategy, mv = %mv, "move");
        position.make_move(mv);
    }

    position.legal_moves();
    let outcome = if position.is_checkmate() {
        if position.white_to_move() {
            "black wins by checkmate"
        } else {
            "white wins by checkmate"
        }
    } else if position.is_stalemate() {
        "draw by stalemate"
    } else {
        "ply limit reached"
    };
    info!(
        plies = position.move_log().len(),
        score = evaluate(&position),
        fen = %position.to_fen(),
        "{outcome}"
    );
    println!("{}", position.board().pretty());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn defaults() {
        let options = Options::from_args(args(&[])).unwrap();
        assert_eq!(options.white, Strategy::Greedy);
        assert_eq!(options.black, Strategy::MinMax);
        assert_eq!(options.max_plies, DEFAULT_MAX_PLIES);
        assert_eq!(options.config, SearchConfig::default());
    }

    #[test]
    fn all_positional() {
        let options = Options::from_args(args(&["random", "greedy", "40", "3"])).unwrap();
        assert_eq!(options.white, Strategy::Random);
        assert_eq!(options.black, Strategy::Greedy);
        assert_eq!(options.max_plies, 40);
        assert_eq!(options.config.depth, 3);
    }

    #[test]
    fn bad_strategy_is_an_error() {
        assert!(Options::from_args(args(&["alphabeta"])).is_err());
    }

    #[test]
    fn bad_number_is_an_error() {
        assert!(Options::from_args(args(&["random", "random", "many"])).is_err());
    }
}
