#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use othello::{init_logging, GameEngine, GameStatus, RandomMover};
#[cfg(feature = "std")]
use serde_json::json;

/// Play one seeded random game and print a JSON summary on stdout.
#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut mover = RandomMover::seeded(seed);
    let mut engine = GameEngine::new();
    let mut passes = 0usize;

    while engine.status() == GameStatus::InProgress {
        let (row, col) = mover
            .pick(&engine)
            .ok_or_else(|| anyhow::anyhow!("no legal move in a game still in progress"))?;
        engine.submit_move(row, col).map_err(|e| anyhow::anyhow!(e))?;
        if engine.last_pass().is_some() {
            passes += 1;
        }
    }

    let score = engine.score();
    let outcome = engine
        .outcome()
        .ok_or_else(|| anyhow::anyhow!("finished game has no outcome"))?;

    let result = json!({
        "seed": seed,
        "moves": engine.moves_played(),
        "passes": passes,
        "black": score.black,
        "white": score.white,
        "outcome": outcome,
        "winner": outcome.winner().map(|p| p.to_string()),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
