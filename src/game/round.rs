//! Round state machine
//!
//! ```text
//!              submit (all correct)
//!            ┌──────────────────────▶ Won
//!            │  submit (last row)
//! InProgress ┼──────────────────────▶ LostByRows
//!            │  timeout
//!            └──────────────────────▶ LostByTimeout
//! ```
//!
//! Terminal states only leave through `reset`.

use crate::core::{Pattern, Word, evaluate};
use crate::game::board::{Board, Cursor};
use std::fmt;
use tracing::{debug, info};

/// Lifecycle status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    LostByRows,
    LostByTimeout,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::LostByRows => "out of guesses",
            Self::LostByTimeout => "time's up",
        };
        f.write_str(label)
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub pattern: Pattern,
    pub status: RoundStatus,
}

/// One play-through from word selection to terminal status
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    board: Board,
    status: RoundStatus,
}

impl Round {
    #[must_use]
    pub fn new(target: Word) -> Self {
        info!("round started");
        Self {
            target,
            board: Board::new(),
            status: RoundStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.board.cursor()
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Number of rows submitted so far
    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        self.board.cursor().row
    }

    /// Type a letter; dropped unless the round is in progress
    pub fn type_letter(&mut self, ch: char) -> bool {
        self.status == RoundStatus::InProgress && self.board.place_letter(ch)
    }

    /// Erase the last typed letter; dropped unless the round is in progress
    pub fn backspace(&mut self) -> bool {
        self.status == RoundStatus::InProgress && self.board.remove_last_letter()
    }

    /// Evaluate the full active row and advance the state machine
    ///
    /// Returns `None` when the round is over or the row is incomplete.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        if self.status != RoundStatus::InProgress {
            return None;
        }

        let guess = self.board.current_guess()?;
        let pattern = evaluate(&guess, &self.target);
        let accepted = self.board.submit_row(&pattern);
        debug_assert!(accepted, "a full row must be submittable");

        debug!(guess = %guess, pattern = %pattern, row = self.guesses_used(), "guess submitted");

        if pattern.is_perfect() {
            self.finish(RoundStatus::Won);
        } else if self.board.is_exhausted() {
            self.finish(RoundStatus::LostByRows);
        }

        Some(SubmitOutcome {
            pattern,
            status: self.status,
        })
    }

    /// Apply a timer expiry; ignored once the round is over
    pub fn timeout(&mut self) -> bool {
        if self.status != RoundStatus::InProgress {
            return false;
        }
        self.finish(RoundStatus::LostByTimeout);
        true
    }

    /// Start over with a new hidden word; only valid once the round is over
    pub fn reset(&mut self, target: Word) -> bool {
        if !self.status.is_terminal() {
            return false;
        }
        *self = Self::new(target);
        true
    }

    fn finish(&mut self, status: RoundStatus) {
        self.status = status;
        info!(%status, guesses = self.guesses_used(), "round finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, ROWS, WORD_LENGTH};

    fn round(target: &str) -> Round {
        Round::new(Word::new(target).unwrap())
    }

    fn enter(round: &mut Round, word: &str) -> Option<SubmitOutcome> {
        for ch in word.chars() {
            round.type_letter(ch);
        }
        round.submit()
    }

    #[test]
    fn starts_in_progress() {
        let r = round("crane");
        assert_eq!(r.status(), RoundStatus::InProgress);
        assert_eq!(r.cursor(), Cursor::default());
        assert_eq!(r.target().text(), "CRANE");
    }

    #[test]
    fn submit_needs_full_row() {
        let mut r = round("crane");
        assert_eq!(enter(&mut r, "cra"), None);
        assert_eq!(r.guesses_used(), 0);
        assert_eq!(r.cursor().col, 3);
    }

    #[test]
    fn correct_guess_wins() {
        let mut r = round("crane");
        let outcome = enter(&mut r, "crane").unwrap();
        assert!(outcome.pattern.is_perfect());
        assert_eq!(outcome.status, RoundStatus::Won);
        assert_eq!(r.status(), RoundStatus::Won);
    }

    #[test]
    fn wrong_guess_stays_in_progress() {
        let mut r = round("crane");
        let outcome = enter(&mut r, "slate").unwrap();
        assert_eq!(outcome.status, RoundStatus::InProgress);
        assert_eq!(r.board().cell(0, 2).feedback, Feedback::Correct);
        assert_eq!(r.cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut r = round("crane");
        for _ in 0..ROWS - 1 {
            enter(&mut r, "slate");
        }
        assert_eq!(enter(&mut r, "crane").unwrap().status, RoundStatus::Won);
    }

    #[test]
    fn running_out_of_rows_loses() {
        let mut r = round("crane");
        for i in 0..ROWS {
            let outcome = enter(&mut r, "slate").unwrap();
            let expected = if i + 1 == ROWS {
                RoundStatus::LostByRows
            } else {
                RoundStatus::InProgress
            };
            assert_eq!(outcome.status, expected);
        }
    }

    #[test]
    fn terminal_round_ignores_input() {
        let mut r = round("crane");
        enter(&mut r, "crane");
        let before = r.board().clone();

        assert!(!r.type_letter('a'));
        assert!(!r.backspace());
        assert_eq!(r.submit(), None);
        assert!(!r.timeout());
        assert_eq!(r.board(), &before);
        assert_eq!(r.status(), RoundStatus::Won);
    }

    #[test]
    fn timeout_only_while_in_progress() {
        let mut r = round("crane");
        assert!(r.timeout());
        assert_eq!(r.status(), RoundStatus::LostByTimeout);
        assert!(!r.type_letter('c'));
    }

    #[test]
    fn extra_letters_are_dropped() {
        let mut r = round("crane");
        for ch in "cranesxyz".chars() {
            r.type_letter(ch);
        }
        assert_eq!(r.cursor().col, WORD_LENGTH);
        assert_eq!(r.board().pending_input(), "CRANE");
    }

    #[test]
    fn reset_rejected_while_in_progress() {
        let mut r = round("crane");
        r.type_letter('s');
        assert!(!r.reset(Word::new("slate").unwrap()));
        assert_eq!(r.target().text(), "CRANE");
        assert_eq!(r.cursor().col, 1);
    }

    #[test]
    fn reset_after_loss_restores_blank_round() {
        let mut r = round("crane");
        enter(&mut r, "slate");
        r.timeout();

        assert!(r.reset(Word::new("pilot").unwrap()));
        assert_eq!(r.status(), RoundStatus::InProgress);
        assert_eq!(r.target().text(), "PILOT");
        assert_eq!(r.board(), &Board::new());
    }

    #[test]
    fn status_labels() {
        assert_eq!(RoundStatus::LostByTimeout.to_string(), "time's up");
        assert!(RoundStatus::Won.is_terminal());
        assert!(!RoundStatus::InProgress.is_terminal());
    }
}
