//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::ScoringPolicy;

/// Two-player tic-tac-toe with a running score
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured scoring policy (first-match or every-match)
    #[arg(long, global = true)]
    pub scoring: Option<ScoringPolicy>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply cell indices (0-8) to a fresh game and print the final state as JSON
    Replay {
        /// Cell indices in play order; invalid moves are ignored
        moves: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).expect("parses");
        assert_eq!(cli.command, None);
        assert_eq!(cli.scoring, None);
    }

    #[test]
    fn test_replay_with_scoring_override() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "replay",
            "0",
            "1",
            "3",
            "--scoring",
            "every-match",
        ])
        .expect("parses");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 1, 3]
            })
        );
        assert_eq!(cli.scoring, Some(ScoringPolicy::EveryMatch));
    }

    #[test]
    fn test_bad_scoring_is_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "--scoring", "most"]).is_err());
    }
}
