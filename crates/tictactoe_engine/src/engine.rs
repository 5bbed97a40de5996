//! The round and score state machine.

use crate::invariants::{EngineInvariants, InvariantSet};
use crate::lines::WinnerRecord;
use crate::position::Position;
use crate::rules::{self, ScoringPolicy};
use crate::types::{Board, Player, Score, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves are accepted. A full board with no line stays here.
    InProgress,
    /// A line was completed; only a restart leaves this state.
    Complete,
}

/// Why a selected cell cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Cell {} is not on the board", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("{} is already taken", _0)]
    SquareOccupied(Position),

    /// The round already has a winner.
    #[display("Round is over, restart to play again")]
    RoundOver,
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe session engine.
///
/// Owns one round's board and the score that survives across rounds.
/// Invalid moves are ignored rather than reported; use
/// [`GameEngine::check_move`] to find out why a move would be refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    starting_player: Player,
    winner: Option<WinnerRecord>,
    score: Score,
    policy: ScoringPolicy,
}

impl GameEngine {
    /// Creates an engine with X to move and the default scoring policy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_policy(ScoringPolicy::default())
    }

    /// Creates an engine with the given scoring policy.
    #[instrument]
    pub fn with_policy(policy: ScoringPolicy) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            starting_player: Player::X,
            winner: None,
            score: Score::default(),
            policy,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square at `index`, or `None` if off the board.
    pub fn cell(&self, index: usize) -> Option<Square> {
        Position::from_index(index).map(|pos| self.board.get(pos))
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the player who opened the current round.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Player to show in the turn indicator: the winner once there is one,
    /// otherwise the player to move.
    pub fn current_display_player(&self) -> Player {
        self.winner.map_or(self.current_player, |w| w.player)
    }

    /// Returns the winner of the current round, if any.
    pub fn winner(&self) -> Option<WinnerRecord> {
        self.winner
    }

    /// Returns the running score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the scoring policy.
    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Returns the phase of the current round.
    pub fn status(&self) -> RoundStatus {
        if self.winner.is_some() {
            RoundStatus::Complete
        } else {
            RoundStatus::InProgress
        }
    }

    /// True if the cell is empty and the round has no winner.
    pub fn is_cell_clickable(&self, index: usize) -> bool {
        self.check_move(index).is_ok()
    }

    /// Validates a move without applying it.
    pub fn check_move(&self, index: usize) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if self.winner.is_some() {
            return Err(MoveError::RoundOver);
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        Ok(pos)
    }

    /// Marks the cell at `index` for the current player.
    ///
    /// Does nothing if the index is off the board, the cell is taken, or
    /// the round already has a winner.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) {
        let pos = match self.check_move(index) {
            Ok(pos) => pos,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                return;
            }
        };

        self.board.set(pos, Square::Occupied(self.current_player));
        self.current_player = self.current_player.opponent();
        debug!(position = %pos, "Mark placed");

        self.evaluate_winner();
        self.check_invariants();
    }

    /// Clears the board for a new round. The player who did not open the
    /// previous round opens this one. Score is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let next = self.starting_player.opponent();

        self.board = Board::new();
        self.winner = None;
        self.current_player = next;
        self.starting_player = next;

        info!(
            starting_player = %next,
            score_x = self.score.x,
            score_o = self.score.o,
            "Round restarted"
        );
        self.check_invariants();
    }

    /// Records a winner and awards points if a line is complete.
    fn evaluate_winner(&mut self) {
        let verdict = rules::evaluate(&self.board, self.policy);

        if let Some(record) = verdict.winner {
            self.winner = Some(record);
            self.score.absorb(verdict.awards);
            info!(
                winner = %record.player,
                orientation = %record.orientation,
                index = record.index,
                score_x = self.score.x,
                score_o = self.score.o,
                "Round won"
            );
        }
    }

    fn check_invariants(&self) {
        if let Err(violations) = <EngineInvariants as InvariantSet<Self>>::check_all(self) {
            let message = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            error!(%message, "Engine state corrupted");
            debug_assert!(violations.is_empty(), "{message}");
        }
    }
}

#[cfg(test)]
impl GameEngine {
    /// Builds an engine from raw parts, bypassing move validation.
    pub(crate) fn from_parts(
        board: Board,
        current_player: Player,
        starting_player: Player,
        winner: Option<WinnerRecord>,
    ) -> Self {
        Self {
            board,
            current_player,
            starting_player,
            winner,
            score: Score::default(),
            policy: ScoringPolicy::default(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
