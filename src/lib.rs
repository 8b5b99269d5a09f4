//! Wordle Timer
//!
//! A timed Wordle: guess the hidden word in six tries before the countdown
//! runs out.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_timer::game::{GameEvent, GameSession, ManualClock, RoundStatus};
//! use wordle_timer::wordlists::ScriptedWordProvider;
//!
//! let provider = ScriptedWordProvider::new(["crane"]);
//! let mut session = GameSession::new(provider, ManualClock::new()).unwrap();
//!
//! let mut events: Vec<_> = "crane".chars().map(GameEvent::Letter).collect();
//! events.push(GameEvent::Submit);
//! session.run_cycle(events).unwrap();
//!
//! assert_eq!(session.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Board, round lifecycle and countdown
pub mod game;

// Word lists and hidden-word providers
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
