#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use othello::{init_logging, GameEngine, LineInput, RandomMover, Session};

#[derive(Parser)]
#[command(author, version, about = "Two-player Othello in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players take turns at this keyboard (the default).
    Play {
        #[arg(long, help = "Start with legal-move markers hidden")]
        no_hints: bool,
    },
    /// Watch a random playout, move by move.
    Watch {
        #[arg(long, help = "Fix RNG seed for a reproducible playout (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { no_hints: false }) {
        Commands::Play { no_hints } => {
            println!("Othello: Black moves first. Type 'help' for commands.");
            let mut session = Session::new(GameEngine::new(), LineInput::stdin(), std::io::stdout())
                .with_hints(!no_hints);
            session.run()?;
        }
        Commands::Watch { seed } => {
            let mover = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (playout will be reproducible)", s);
                    RandomMover::seeded(s)
                }
                None => RandomMover::from_entropy(),
            };
            let mut session = Session::new(GameEngine::new(), mover, std::io::stdout());
            let status = session.run()?;
            log::info!(
                "playout finished after {} moves with status {:?}",
                session.engine().moves_played(),
                status
            );
        }
    }
    Ok(())
}
