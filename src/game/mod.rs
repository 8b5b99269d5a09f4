//! Game state machine
//!
//! Board, round lifecycle, countdown and the session that ties them together.

pub mod board;
pub mod round;
pub mod session;
pub mod stats;
pub mod timer;

pub use board::{Board, Cell, Cursor};
pub use round::{Round, RoundStatus, SubmitOutcome};
pub use session::{GameEvent, GameSession};
pub use stats::Statistics;
pub use timer::{
    Clock, LOW_TIME_SECS, ManualClock, MonotonicClock, TIME_BUDGET_SECS, Timer, TimerEvent,
};
