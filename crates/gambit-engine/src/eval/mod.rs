//! Static evaluation.

pub mod material;

use gambit_core::GameTree;

use self::material::material;

/// Score of a checkmated position, signed for the side that delivered mate.
pub const CHECKMATE: i32 = 1000;

/// Score of a stalemated position.
pub const STALEMATE: i32 = 0;

/// Evaluate a position from White's perspective.
///
/// Terminal flags come from the last legal-move pass: a mate scores
/// `±CHECKMATE` in favour of the side not to move, a stalemate scores
/// [`STALEMATE`]; otherwise the material balance is returned.
pub fn evaluate<P: GameTree + ?Sized>(position: &P) -> i32 {
    if position.is_checkmate() {
        if position.white_to_move() {
            -CHECKMATE
        } else {
            CHECKMATE
        }
    } else if position.is_stalemate() {
        STALEMATE
    } else {
        material(position.board())
    }
}

#[cfg(test)]
mod tests {
    use gambit_core::Position;

    use super::{CHECKMATE, STALEMATE, evaluate};

    #[test]
    fn mated_white_scores_negative() {
        let mut pos =
            Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert!(pos.legal_moves().is_empty());
        assert_eq!(evaluate(&pos), -CHECKMATE);
    }

    #[test]
    fn mated_black_scores_positive() {
        let mut pos = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(pos.legal_moves().is_empty());
        assert_eq!(evaluate(&pos), CHECKMATE);
    }

    #[test]
    fn stalemate_scores_zero_despite_material() {
        let mut pos = Position::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(pos.legal_moves().is_empty());
        assert_eq!(evaluate(&pos), STALEMATE);
    }

    #[test]
    fn otherwise_material() {
        let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        pos.legal_moves();
        assert_eq!(evaluate(&pos), 5);
    }
}
