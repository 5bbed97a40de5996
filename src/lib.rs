//! Two-player tic-tac-toe in the terminal.
//!
//! The game rules and score live in [`tictactoe_engine`]; this crate adds the
//! terminal front end, configuration and a headless replay command.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the round and the running score
//! - **TUI**: [`tui::App`] turns key presses and clicks into engine calls
//! - **Config**: [`AppConfig`] read from `tictactoe.toml`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Headless replay
pub use replay::{replay, replay_json};

// Crate-level exports - TUI entry point
pub use tui::run_tui;

// Crate-level exports - Game types
pub use tictactoe_engine::{
    GameEngine, MoveError, Orientation, Player, Position, RoundStatus, Score, ScoringPolicy,
    Square, WinnerRecord,
};
