//! Board grid and cursor
//!
//! The board only enforces its own geometry. Whether input is allowed at all
//! (round still running) is decided by the round controller.

use crate::core::{Feedback, Pattern, ROWS, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// A single letter slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<u8>,
    pub feedback: Feedback,
}

/// Position of the next edit
///
/// `row == ROWS` once every row has been submitted; `col == WORD_LENGTH` when
/// the active row is full and ready to submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// The guess grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [[Cell; WORD_LENGTH]; ROWS],
    cursor: Cursor,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn rows(&self) -> &[[Cell; WORD_LENGTH]; ROWS] {
        &self.rows
    }

    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    /// Whether every row has been submitted
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.cursor.row >= ROWS
    }

    /// Whether the active row holds a complete guess
    #[must_use]
    pub const fn row_is_full(&self) -> bool {
        !self.is_exhausted() && self.cursor.col == WORD_LENGTH
    }

    /// Write a letter into the next free cell of the active row
    ///
    /// Returns `false` (and changes nothing) when the row is full, the board
    /// is exhausted or `ch` is not an ASCII letter.
    pub fn place_letter(&mut self, ch: char) -> bool {
        if self.is_exhausted() || self.cursor.col >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return false;
        }

        let Cursor { row, col } = self.cursor;
        self.rows[row][col].letter = Some(ch.to_ascii_uppercase() as u8);
        self.cursor.col += 1;
        true
    }

    /// Clear the last typed letter of the active row
    pub fn remove_last_letter(&mut self) -> bool {
        if self.is_exhausted() || self.cursor.col == 0 {
            return false;
        }

        self.cursor.col -= 1;
        let Cursor { row, col } = self.cursor;
        self.rows[row][col].letter = None;
        true
    }

    /// Record feedback for the full active row and move to the next one
    pub fn submit_row(&mut self, pattern: &Pattern) -> bool {
        if !self.row_is_full() {
            return false;
        }

        let row = self.cursor.row;
        for (cell, &feedback) in self.rows[row].iter_mut().zip(pattern.feedback()) {
            cell.feedback = feedback;
        }

        self.cursor.row += 1;
        self.cursor.col = 0;
        true
    }

    /// The word spelled by the active row, once it is full
    #[must_use]
    pub fn current_guess(&self) -> Option<Word> {
        if !self.row_is_full() {
            return None;
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(&self.rows[self.cursor.row]) {
            *slot = cell.letter?;
        }
        Some(Word::from_letters(letters))
    }

    /// Letters of the active row typed so far
    #[must_use]
    pub fn pending_input(&self) -> String {
        if self.is_exhausted() {
            return String::new();
        }
        self.rows[self.cursor.row]
            .iter()
            .filter_map(|cell| cell.letter.map(char::from))
            .collect()
    }

    /// Submitted rows as (guess, feedback) pairs, oldest first
    pub fn submitted_rows(&self) -> impl Iterator<Item = (Word, Pattern)> + '_ {
        self.rows[..self.cursor.row].iter().filter_map(|row| {
            let mut letters = [0u8; WORD_LENGTH];
            let mut feedback = [Feedback::Empty; WORD_LENGTH];
            for (i, cell) in row.iter().enumerate() {
                letters[i] = cell.letter?;
                feedback[i] = cell.feedback;
            }
            Some((Word::from_letters(letters), Pattern::new(feedback)))
        })
    }

    /// Strongest feedback seen so far for every guessed letter
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<u8, Feedback> {
        let mut states: FxHashMap<u8, Feedback> = FxHashMap::default();
        for cell in self.rows[..self.cursor.row].iter().flatten() {
            if let Some(letter) = cell.letter {
                let entry = states.entry(letter).or_default();
                *entry = (*entry).max(cell.feedback);
            }
        }
        states
    }
}
