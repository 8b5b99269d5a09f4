//! Single guess evaluation command
//!
//! Scores one guess against a chosen target without starting a round.

use crate::core::{Pattern, Word, WordError};

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub pattern: Pattern,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns `WordError` if either input is not a valid word.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let pattern = Pattern::calculate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        pattern,
    })
}
