#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, outcome_line, print_session, run_interactive, GameError, GameSession,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive session in the terminal.
    Play,
    /// Run a scripted session and print the resulting boards.
    Demo,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => {
            let mut session = GameSession::new().map_err(|e| anyhow::anyhow!(e))?;
            run_interactive(&mut session)?;
        }
        Commands::Demo => {
            run_demo().map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}

/// One full scripted session: the sample fleet, the battle transition,
/// and a handful of attacks, printed for inspection.
#[cfg(feature = "std")]
fn run_demo() -> Result<(), GameError> {
    let mut session = GameSession::new()?;

    // 3 across row 3, 4 down column H
    for (row, col) in [(2, 3), (2, 4), (2, 5), (6, 7), (7, 7), (8, 7), (9, 7)] {
        session.toggle_placement(row, col)?;
    }
    session.start_battle()?;
    println!("Battle started. The enemy opened fire on your fleet.\n");

    for (row, col) in [(2, 4), (0, 0), (2, 4), (2, 3)] {
        let outcome = session.attack_opponent(row, col)?;
        println!("{}", outcome_line(row, col, outcome));
    }
    println!();
    print_session(&session);
    Ok(())
}
