//! Guess feedback classification and evaluation
//!
//! Each letter of a submitted guess is classified against the hidden word:
//! - `Absent` (gray): letter not available in the target
//! - `Present` (yellow): letter in the target, but at another position
//! - `Correct` (green): letter at the exact position
//!
//! `Empty` marks a cell that has not been submitted yet.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single cell
///
/// Variants are ordered by strength, so `max` picks the most informative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Feedback {
    #[default]
    Empty,
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Empty => '⬛',
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    /// Create a pattern from explicit per-letter feedback
    #[inline]
    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Per-letter feedback, left to right
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Handles duplicate letters the way Wordle does: a letter is never
    /// credited more times than it occurs in the target.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those target letters
    /// 2. Second pass: for every other position, consume the leftmost
    ///    remaining occurrence of the letter and mark it present
    ///
    /// # Examples
    /// ```
    /// use wordle_timer::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("allot").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     pattern.feedback(),
    ///     &[
    ///         Feedback::Present,
    ///         Feedback::Correct,
    ///         Feedback::Present,
    ///         Feedback::Absent,
    ///         Feedback::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut remaining: [Option<u8>; WORD_LENGTH] = target.chars().map(Some);

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Feedback::Correct;
                remaining[i] = None;
            }
        }

        // Second pass: right letter, wrong position
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Feedback::Correct {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(g)) {
                *slot = None;
                result[i] = Feedback::Present;
            }
        }

        Self(result)
    }

    /// Count positions carrying the given feedback
    #[must_use]
    pub fn count(self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_timer::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Feedback::Empty; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Feedback::Correct,
                'Y' | 'y' | '🟨' => Feedback::Present,
                '-' | '_' | '⬜' => Feedback::Absent,
                _ => return None,
            };
        }

        Some(Self(result))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_timer::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self([Feedback::Empty; WORD_LENGTH])
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

/// Evaluate a guess against the hidden word
///
/// Shorthand for [`Pattern::calculate`].
#[inline]
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Pattern {
    Pattern::calculate(guess, target)
}
