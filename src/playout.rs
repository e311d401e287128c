// Random legal playouts for the simulator and property tests.
// Avoids heap allocations; works with any `Rng`.

use crate::{
    config::CELLS,
    game::{GameEngine, GameStatus},
};
use rand::Rng;

/// Result of a single random playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playout {
    /// Terminal status of the finished game.
    pub status: GameStatus,
    /// Number of accepted moves, at most nine.
    pub moves: usize,
}

/// Play uniformly random legal moves on a fresh engine until the game ends.
/// Deterministic for a fixed RNG seed.
pub fn random_game<R: Rng + ?Sized>(rng: &mut R) -> Playout {
    let mut engine = GameEngine::new();
    let mut moves = 0;
    while !engine.status().is_terminal() {
        let cell = random_empty_cell(&engine, rng);
        if engine.apply_move(cell) {
            moves += 1;
        }
    }
    Playout {
        status: engine.status(),
        moves,
    }
}

/// Pick one of the currently empty cells uniformly at random.
fn random_empty_cell<R: Rng + ?Sized>(engine: &GameEngine, rng: &mut R) -> usize {
    let cells = engine.cells();
    let empty = cells.iter().filter(|held| held.is_none()).count();
    let mut pick = rng.random_range(0..empty);
    for (i, held) in cells.iter().enumerate() {
        if held.is_none() {
            if pick == 0 {
                return i;
            }
            pick -= 1;
        }
    }
    // An in-progress game always has an empty cell.
    CELLS - 1
}
