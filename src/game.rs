use crate::{
    board::Board,
    common::Mark,
    config::{CELLS, LINES},
    event::{GameEvent, GameObserver, Outcome},
    line::Line,
};
use alloc::boxed::Box;
use core::fmt;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won { mark: Mark, line: Line },
    Draw,
}

impl GameStatus {
    /// Returns `true` once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Terminal outcome, if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            GameStatus::InProgress => None,
            GameStatus::Won { mark, line } => Some(Outcome::Won { mark, line }),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Serializable snapshot of the overall game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub cells: [Option<Mark>; CELLS],
    pub turn: Mark,
    pub status: GameStatus,
}

/// Core game logic: the single source of truth for board, turn and status.
///
/// Move requests that are illegal (wrong phase, out-of-range index, occupied
/// cell) are ignored without touching any state; they never error. Consumers
/// observe the game through [`GameObserver`] notifications and the query
/// accessors, never by mutating the engine.
pub struct GameEngine {
    board: Board,
    turn: Mark,
    status: GameStatus,
    observer: Option<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Create a new engine: empty board, `X` to move, game in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            observer: None,
        }
    }

    /// Attach the notification consumer, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = Some(observer);
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of all cells in index order.
    pub fn cells(&self) -> [Option<Mark>; CELLS] {
        self.board.cells()
    }

    /// The mark whose turn it is. After a terminal move the turn stays on
    /// the last mover, so this reports the winner once the game is won.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply a move at `cell` for the mark whose turn it is.
    ///
    /// Returns `true` when the move was accepted. Illegal requests (game
    /// already over, index outside `0..9`, occupied cell) return `false`
    /// and leave board, turn and status untouched.
    pub fn apply_move(&mut self, cell: usize) -> bool {
        if self.status.is_terminal() {
            log::debug!("move at {} rejected: game is over", cell);
            self.emit(GameEvent::MoveRejected { cell });
            return false;
        }
        let mark = self.turn;
        if let Err(e) = self.board.mark(cell, mark) {
            log::debug!("move at {} rejected: {}", cell, e);
            self.emit(GameEvent::MoveRejected { cell });
            return false;
        }
        self.emit(GameEvent::MoveApplied { cell, mark });
        self.status = self.evaluate(mark);
        match self.status.outcome() {
            Some(outcome) => {
                log::info!("game over: {:?}", outcome);
                self.emit(GameEvent::GameOver { outcome });
            }
            None => self.turn = mark.other(),
        }
        true
    }

    /// Return the game to its initial state: empty board, `X` to move,
    /// in progress. Valid from any state, including mid-game.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Mark::X;
        self.status = GameStatus::InProgress;
        log::info!("game reset");
        self.emit(GameEvent::Reset);
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            cells: self.board.cells(),
            turn: self.turn,
            status: self.status,
        }
    }

    /// Restore an engine from a previously saved state. The restored engine
    /// has no observer attached.
    pub fn from_state(state: GameState) -> Self {
        Self {
            board: Board::from(&state.cells),
            turn: state.turn,
            status: state.status,
            observer: None,
        }
    }

    /// Scan the winning lines in table order; first complete line wins.
    /// Only the mover's mark can have completed a line this move.
    fn evaluate(&self, mark: Mark) -> GameStatus {
        let held = self.board.marks(mark);
        for line in LINES.iter() {
            if held.contains(line.mask()) {
                return GameStatus::Won { mark, line: *line };
            }
        }
        if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    fn emit(&mut self, event: GameEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.handle_event(&event);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GameEngine {{\n  board: {:?},\n  turn: {:?},\n  status: {:?}\n}}",
            self.board, self.turn, self.status
        )
    }
}
