#![cfg(feature = "std")]

//! Terminal presentation: grid printing, coordinate parsing and the
//! [`GameObserver`] implementation that reacts to engine notifications.

use std::string::String;

use crate::{
    board::Board,
    config::GRID_SIZE,
    event::{GameEvent, GameObserver, Outcome},
    game::GameStatus,
    line::Line,
};

/// Format a cell index as a coordinate, e.g. `4` -> `"B2"`.
pub fn cell_to_string(cell: usize) -> String {
    let row = cell / GRID_SIZE;
    let col = cell % GRID_SIZE;
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Parse a coordinate such as `B2` (column letter, row number) into a cell
/// index. Case-insensitive; returns `None` for anything off the grid.
pub fn parse_cell(input: &str) -> Option<usize> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.trim().parse().ok()?;
    if col >= GRID_SIZE || row == 0 || row > GRID_SIZE {
        return None;
    }
    Some((row - 1) * GRID_SIZE + col)
}

/// Print the grid with lettered columns and numbered rows. Cells on
/// `winning` are bracketed, mirroring the win highlight of the game's
/// original presentation.
pub fn print_board(board: &Board, winning: Option<&Line>) {
    print!("  ");
    for c in 0..GRID_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {} ", ch);
    }
    println!();
    for r in 0..GRID_SIZE {
        print!("{:2}", r + 1);
        for c in 0..GRID_SIZE {
            let cell = r * GRID_SIZE + c;
            let ch = match board.cell(cell) {
                Ok(Some(mark)) => mark.symbol(),
                _ => '.',
            };
            if winning.map(|line| line.crosses(cell)).unwrap_or(false) {
                print!("[{}]", ch);
            } else {
                print!(" {} ", ch);
            }
        }
        println!();
    }
}

/// Print the game-over banner and the result message.
pub fn print_game_over(status: &GameStatus) {
    println!("\n╔═══════════════════════════╗");
    println!("║         GAME OVER         ║");
    println!("╚═══════════════════════════╝");
    match status {
        GameStatus::Won { mark, line } => {
            println!("{} wins on the {}!", mark, line);
        }
        GameStatus::Draw => {
            println!("It's a draw.");
        }
        GameStatus::InProgress => {}
    }
}

/// Presentation-layer consumer of engine notifications. Prints a reaction
/// to every event; the surrounding loop owns grid printing and prompts.
pub struct CliPresenter;

impl CliPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for CliPresenter {
    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MoveApplied { cell, mark } => {
                println!("{} -> {}", mark, cell_to_string(*cell));
            }
            GameEvent::GameOver { outcome } => match outcome {
                Outcome::Won { mark, line } => {
                    println!("{} takes the {}. Nice play!", mark, line);
                }
                Outcome::Draw => {
                    println!("All squares filled — it's a draw.");
                }
            },
            GameEvent::Reset => {
                println!("Board cleared. X to move.");
            }
            GameEvent::MoveRejected { cell } => {
                let place = if *cell < crate::config::CELLS {
                    cell_to_string(*cell)
                } else {
                    format!("index {}", cell)
                };
                println!("Move at {} ignored (square taken or game over).", place);
            }
        }
    }
}
