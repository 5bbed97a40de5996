//! tictactoe - terminal tic-tac-toe with a running score.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictactoe::{AppConfig, Cli, Command, replay_json, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(scoring) = cli.scoring {
        config = config.with_scoring(scoring);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(&config)?;
            run_tui(config)
        }
        Command::Replay { moves } => {
            init_stderr_logging(&config);
            info!(?moves, scoring = %config.scoring(), "Replaying moves");
            println!("{}", replay_json(*config.scoring(), &moves)?);
            Ok(())
        }
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so output never lands on the alternate screen.
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
