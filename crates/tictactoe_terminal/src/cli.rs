//! Command-line interface for the terminal game.

use clap::Parser;

/// Play tic-tac-toe against the computer in your terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Pause before the computer answers, in milliseconds (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random moves (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}
