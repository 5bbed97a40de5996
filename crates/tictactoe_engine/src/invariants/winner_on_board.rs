//! A recorded winner must be backed by a complete line.

use super::Invariant;
use crate::GameEngine;

/// Invariant: the winner's line is fully occupied by the winner.
pub struct WinnerOnBoardInvariant;

impl Invariant<GameEngine> for WinnerOnBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        match engine.winner() {
            None => true,
            Some(record) => record
                .line()
                .is_some_and(|line| line.owner(engine.board()) == Some(record.player)),
        }
    }

    fn description() -> &'static str {
        "Recorded winner owns the recorded line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Orientation, Player, Position, Square, WinnerRecord};

    fn left_column_for(player: Player) -> Board {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft] {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    fn record(player: Player, orientation: Orientation, index: usize) -> Option<WinnerRecord> {
        Some(WinnerRecord {
            player,
            orientation,
            index,
        })
    }

    #[test]
    fn test_holds_without_winner() {
        assert!(WinnerOnBoardInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_holds_after_win() {
        let mut engine = GameEngine::new();
        for i in [0, 3, 1, 4, 2] {
            engine.apply_move(i);
        }
        assert!(engine.winner().is_some());
        assert!(WinnerOnBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_detects_winner_without_line() {
        let engine = GameEngine::from_parts(
            Board::new(),
            Player::O,
            Player::X,
            record(Player::X, Orientation::Vertical, 0),
        );
        assert!(!WinnerOnBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_detects_line_owned_by_other_player() {
        let engine = GameEngine::from_parts(
            left_column_for(Player::X),
            Player::O,
            Player::X,
            record(Player::O, Orientation::Vertical, 0),
        );
        assert!(!WinnerOnBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_detects_line_outside_catalog() {
        let engine = GameEngine::from_parts(
            left_column_for(Player::X),
            Player::O,
            Player::X,
            record(Player::X, Orientation::Diagonal, 2),
        );
        assert!(!WinnerOnBoardInvariant::holds(&engine));
    }
}
