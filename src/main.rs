#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};

#[cfg(feature = "std")]
use clap::Parser;

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, parse_cell, print_board, print_game_over, CliPresenter, GameEngine, GameStatus,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player hot-seat game in the terminal.
    Play,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(),
    }
}

#[cfg(feature = "std")]
fn run_play() -> anyhow::Result<()> {
    let mut engine = GameEngine::new();
    engine.set_observer(Box::new(CliPresenter::new()));

    println!("Tic-tac-toe: two players, one terminal.");
    println!("Enter a coordinate like B2. 'r' restarts, 'q' quits.\n");
    print_board(engine.board(), None);

    loop {
        if engine.status().is_terminal() {
            let status = engine.status();
            print_game_over(&status);
            let winning = match status {
                GameStatus::Won { line, .. } => Some(line),
                _ => None,
            };
            print_board(engine.board(), winning.as_ref());

            print!("\nPlay again? [y/N]: ");
            io::stdout().flush()?;
            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().eq_ignore_ascii_case("y") {
                engine.reset();
                print_board(engine.board(), None);
                continue;
            }
            break;
        }

        print!("{} to move: ", engine.turn());
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        match input {
            "q" | "quit" => break,
            "r" | "restart" => {
                engine.reset();
                print_board(engine.board(), None);
            }
            _ => match parse_cell(input) {
                Some(cell) => {
                    if engine.apply_move(cell) && !engine.status().is_terminal() {
                        print_board(engine.board(), None);
                    }
                }
                None => println!("Invalid coordinate (column letter then row, e.g. B2)."),
            },
        }
    }
    Ok(())
}
