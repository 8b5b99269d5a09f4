//! Core domain types for the game
//!
//! Words, per-letter feedback and the guess evaluator. Everything here is pure
//! and has no knowledge of rounds, timers or terminals.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern, evaluate};
pub use word::{Word, WordError};

/// Number of letters in every word and every board row
pub const WORD_LENGTH: usize = 5;

/// Number of guesses the player gets per round
pub const ROWS: usize = 6;
