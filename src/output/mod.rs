//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    colored_row, print_check_result, print_round_over, print_statistics, print_turn_header,
};
