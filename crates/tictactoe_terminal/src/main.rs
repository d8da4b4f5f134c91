//! Tic-tac-toe against the computer, in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod alerts;
mod cli;
mod config;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::TerminalConfig;
use session::Session;
use tictactoe_engine::Engine;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never land inside the board on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => TerminalConfig::from_file(path)?,
        None => TerminalConfig::default(),
    }
    .with_overrides(cli.delay_ms, cli.seed);
    info!(?config, "Starting tic-tac-toe");

    let engine = match config.seed() {
        Some(seed) => Engine::with_seed(*seed),
        None => Engine::new(),
    };

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut session = Session::new(engine, stdin, tokio::io::stdout(), config.thinking_delay());
    session.run().await?;

    Ok(())
}
