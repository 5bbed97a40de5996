//! Headless replay of a move list.

use tictactoe_engine::{GameEngine, ScoringPolicy};
use tracing::instrument;

/// Applies `moves` to a fresh engine, ignoring refused moves exactly as the
/// TUI does.
#[instrument]
pub fn replay(policy: ScoringPolicy, moves: &[usize]) -> GameEngine {
    let mut engine = GameEngine::with_policy(policy);
    for &index in moves {
        engine.apply_move(index);
    }
    engine
}

/// Like [`replay`], rendered as pretty JSON.
pub fn replay_json(policy: ScoringPolicy, moves: &[usize]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&replay(policy, moves))
}
