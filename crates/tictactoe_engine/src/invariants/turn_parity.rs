//! Turn parity: the starting player is never behind, never two ahead.

use super::Invariant;
use crate::GameEngine;

/// Invariant: marks alternate from the round's starting player.
///
/// The starting player has as many marks as the other player, or one more.
/// When counts are equal the starting player is to move; otherwise the other
/// player is.
pub struct TurnParityInvariant;

impl Invariant<GameEngine> for TurnParityInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let first = engine.starting_player();
        let second = first.opponent();
        let board = engine.board();

        let lead = board.count(first) as isize - board.count(second) as isize;
        match lead {
            0 => engine.current_player() == first,
            1 => engine.current_player() == second,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate from the starting player"
    }
}
