//! Notifications exchanged between the game engine and its presentation
//! layer. The engine is the sole writer of game state; consumers react to
//! these events and render, never mutating the engine directly.

use crate::common::Mark;
use crate::line::Line;

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// `mark` completed `line`.
    Won { mark: Mark, line: Line },
    /// All nine cells filled with no complete line.
    Draw,
}

/// Events emitted by the engine for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A legal move was accepted and the cell now holds `mark`.
    MoveApplied { cell: usize, mark: Mark },
    /// The accepted move ended the game.
    GameOver { outcome: Outcome },
    /// The board was returned to its initial state.
    Reset,
    /// A move request was ignored: game over, out-of-range index, or an
    /// occupied cell. State is unchanged; emitted for observability only.
    MoveRejected { cell: usize },
}

/// Interface implemented by consumers of engine notifications.
pub trait GameObserver {
    /// React to a single engine event.
    fn handle_event(&mut self, event: &GameEvent);
}
