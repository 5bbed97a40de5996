//! Win detection and scoring.

use crate::lines::{WIN_LINES, WinnerRecord};
use crate::types::{Board, Player, Score};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// How a completed board is turned into a winner and score awards.
///
/// The two policies only differ when more than one line is complete at
/// the moment of evaluation. A single legal move can close two lines at
/// once (a row and a diagonal through the center, say), so the choice is
/// observable in normal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringPolicy {
    /// Scan lines in catalog order, both players per line, and stop at the
    /// first completed one. The round is worth exactly one point.
    #[default]
    FirstMatch,
    /// Scan every line for X, then every line for O. Each completed line
    /// awards a point and overwrites the recorded winner, so the last match
    /// is the one displayed.
    EveryMatch,
}

impl std::str::FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-match" => Ok(Self::FirstMatch),
            "every-match" => Ok(Self::EveryMatch),
            other => Err(format!(
                "unknown scoring policy '{}' (expected first-match or every-match)",
                other
            )),
        }
    }
}

impl std::fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstMatch => write!(f, "first-match"),
            Self::EveryMatch => write!(f, "every-match"),
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verdict {
    /// The line to display, if any line is complete.
    pub winner: Option<WinnerRecord>,
    /// Points to add to the running score.
    pub awards: Score,
}

/// Evaluates `board` under `policy`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, policy: ScoringPolicy) -> Verdict {
    let mut verdict = Verdict::default();

    match policy {
        ScoringPolicy::FirstMatch => {
            if let Some((line, player)) = WIN_LINES
                .iter()
                .find_map(|line| line.owner(board).map(|p| (line, p)))
            {
                verdict.winner = Some(WinnerRecord::new(player, line));
                verdict.awards.increment(player);
            }
        }
        ScoringPolicy::EveryMatch => {
            for player in Player::iter() {
                for line in WIN_LINES.iter().filter(|l| l.owner(board) == Some(player)) {
                    verdict.winner = Some(WinnerRecord::new(player, line));
                    verdict.awards.increment(player);
                }
            }
        }
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::Orientation;
    use crate::position::Position;
    use crate::types::Square;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(i, player) in marks {
            let pos = Position::from_index(i).expect("valid index");
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        for policy in [ScoringPolicy::FirstMatch, ScoringPolicy::EveryMatch] {
            assert_eq!(evaluate(&Board::new(), policy), Verdict::default());
        }
    }

    #[test]
    fn test_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        let verdict = evaluate(&board, ScoringPolicy::FirstMatch);
        assert_eq!(
            verdict.winner,
            Some(WinnerRecord {
                player: Player::X,
                orientation: Orientation::Horizontal,
                index: 0,
            })
        );
        assert_eq!(verdict.awards, Score { x: 1, o: 0 });
    }

    #[test]
    fn test_double_line_first_match_awards_once() {
        // X holds row 1 and the main diagonal.
        let board = board_with(&[
            (0, Player::X),
            (3, Player::X),
            (4, Player::X),
            (5, Player::X),
            (8, Player::X),
        ]);
        let verdict = evaluate(&board, ScoringPolicy::FirstMatch);
        let winner = verdict.winner.expect("winner");
        assert_eq!(winner.orientation, Orientation::Horizontal);
        assert_eq!(winner.index, 1);
        assert_eq!(verdict.awards, Score { x: 1, o: 0 });
    }

    #[test]
    fn test_double_line_every_match_awards_each_and_shows_last() {
        let board = board_with(&[
            (0, Player::X),
            (3, Player::X),
            (4, Player::X),
            (5, Player::X),
            (8, Player::X),
        ]);
        let verdict = evaluate(&board, ScoringPolicy::EveryMatch);
        let winner = verdict.winner.expect("winner");
        assert_eq!(winner.orientation, Orientation::Diagonal);
        assert_eq!(winner.index, 0);
        assert_eq!(verdict.awards, Score { x: 2, o: 0 });
    }

    #[test]
    fn test_both_players_complete_lines() {
        // Not reachable through play, only through direct board edits.
        let board = board_with(&[
            (3, Player::X),
            (4, Player::X),
            (5, Player::X),
            (6, Player::O),
            (7, Player::O),
            (8, Player::O),
        ]);

        let first = evaluate(&board, ScoringPolicy::FirstMatch);
        assert_eq!(first.winner.map(|w| w.player), Some(Player::X));
        assert_eq!(first.awards, Score { x: 1, o: 0 });

        let every = evaluate(&board, ScoringPolicy::EveryMatch);
        assert_eq!(every.winner.map(|w| w.player), Some(Player::O));
        assert_eq!(every.awards, Score { x: 1, o: 1 });
    }

    #[test]
    fn test_policy_parse_and_display() {
        for policy in [ScoringPolicy::FirstMatch, ScoringPolicy::EveryMatch] {
            assert_eq!(policy.to_string().parse::<ScoringPolicy>(), Ok(policy));
        }
        assert!("sometimes".parse::<ScoringPolicy>().is_err());
    }
}
