//! Tic-tac-toe rounds with a running score.
//!
//! [`GameEngine`] owns one session: the board of the current round, whose
//! turn it is, who opened the round, the winner (if any) and the score that
//! carries over from round to round.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Orientation, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 1, 3, 4, 6] {
//!     engine.apply_move(index);
//! }
//!
//! let winner = engine.winner().unwrap();
//! assert_eq!(winner.player, Player::X);
//! assert_eq!(winner.orientation, Orientation::Vertical);
//! assert_eq!(engine.score().x, 1);
//!
//! engine.restart();
//! assert_eq!(engine.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod invariants;
mod lines;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, MoveError, RoundStatus};
pub use lines::{Orientation, WIN_LINES, WinLine, WinnerRecord};
pub use position::Position;
pub use rules::ScoringPolicy;
pub use types::{Board, Player, Score, Square};
