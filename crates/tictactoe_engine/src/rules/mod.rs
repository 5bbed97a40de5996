//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so they can be tested without driving a whole round.

pub mod win;

pub use win::{ScoringPolicy, Verdict, evaluate};
