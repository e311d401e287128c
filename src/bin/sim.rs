#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use tictactoe::{random_game, GameStatus, Mark};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;
    let mut total_moves = 0usize;

    for _ in 0..games {
        let playout = random_game(&mut rng);
        match playout.status {
            GameStatus::Won { mark: Mark::X, .. } => x_wins += 1,
            GameStatus::Won { mark: Mark::O, .. } => o_wins += 1,
            GameStatus::Draw => draws += 1,
            GameStatus::InProgress => {}
        }
        total_moves += playout.moves;
    }

    let avg_moves = if games == 0 {
        0.0
    } else {
        total_moves as f64 / games as f64
    };
    let result = json!({
        "seed": seed,
        "games": games,
        "x_wins": x_wins,
        "o_wins": o_wins,
        "draws": draws,
        "avg_moves": avg_moves,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
