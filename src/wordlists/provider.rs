//! Hidden word providers

use crate::core::{Word, WordError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Failure to produce a hidden word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("word list entry '{entry}' is not a valid word: {source}")]
    Malformed {
        entry: String,
        #[source]
        source: WordError,
    },
}

/// Supplies the hidden word for each round
pub trait WordProvider {
    /// Pick the next hidden word
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when no valid word can be produced.
    fn pick_word(&mut self) -> Result<Word, ProviderError>;
}

impl<P: WordProvider + ?Sized> WordProvider for Box<P> {
    fn pick_word(&mut self) -> Result<Word, ProviderError> {
        (**self).pick_word()
    }
}

/// Uniformly random choice from a word list
#[derive(Debug, Clone)]
pub struct RandomWordProvider<R = StdRng> {
    words: Vec<Word>,
    rng: R,
}

impl RandomWordProvider<StdRng> {
    /// Provider seeded from the OS
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::EmptyWordList` if `words` is empty.
    pub fn from_entropy(words: Vec<Word>) -> Result<Self, ProviderError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Provider with a reproducible sequence of words
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::EmptyWordList` if `words` is empty.
    pub fn seeded(words: Vec<Word>, seed: u64) -> Result<Self, ProviderError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWordProvider<R> {
    /// # Errors
    ///
    /// Returns `ProviderError::EmptyWordList` if `words` is empty.
    pub fn with_rng(words: Vec<Word>, rng: R) -> Result<Self, ProviderError> {
        if words.is_empty() {
            return Err(ProviderError::EmptyWordList);
        }
        Ok(Self { words, rng })
    }
}

impl<R: Rng> WordProvider for RandomWordProvider<R> {
    fn pick_word(&mut self) -> Result<Word, ProviderError> {
        // Half-open range: every index is in bounds
        let index = self.rng.random_range(0..self.words.len());
        Ok(self.words[index].clone())
    }
}

/// Cycles through a fixed list of raw entries
///
/// Entries are validated on every pick, so a bad entry surfaces as a
/// `ProviderError` exactly when it would become the hidden word.
#[derive(Debug, Clone)]
pub struct ScriptedWordProvider {
    entries: Vec<String>,
    next: usize,
}

impl ScriptedWordProvider {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl WordProvider for ScriptedWordProvider {
    fn pick_word(&mut self) -> Result<Word, ProviderError> {
        if self.entries.is_empty() {
            return Err(ProviderError::EmptyWordList);
        }

        let entry = &self.entries[self.next % self.entries.len()];
        self.next = self.next.wrapping_add(1);
        Word::new(entry).map_err(|source| ProviderError::Malformed {
            entry: entry.clone(),
            source,
        })
    }
}
