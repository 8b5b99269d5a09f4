//! Interactive TUI interface

mod app;
pub mod input;
mod rendering;

pub use app::{App, TICK_RATE_MS, run_tui};
