//! Perft (performance test) for move generation correctness verification.
//!
//! Promotion is always to a queen here, so counts agree with published
//! tables only at depths where no promotion occurs.

use crate::position::Position;

/// Count the leaf nodes of the legal move tree `depth` plies deep.
///
/// The position is walked with make/undo and left as it was found.
pub fn perft(position: &mut Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        position.make_move(mv);
        nodes += perft(position, depth - 1);
        position.undo_move();
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(notation, node_count)` pairs sorted alphabetically.
pub fn divide(position: &mut Position, depth: usize) -> Vec<(String, u64)> {
    let moves = position.legal_moves();
    let mut results: Vec<(String, u64)> = moves
        .into_iter()
        .map(|mv| {
            position.make_move(mv);
            let count = if depth <= 1 { 1 } else { perft(position, depth - 1) };
            position.undo_move();
            (mv.to_notation(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
