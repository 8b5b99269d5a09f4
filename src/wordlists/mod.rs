//! Word lists and hidden-word providers
//!
//! Provides the embedded word list compiled into the binary, a file loader and
//! the [`WordProvider`] implementations that pick each round's hidden word.

mod embedded;
pub mod loader;
pub mod provider;

pub use embedded::{WORDS, WORDS_COUNT};
pub use provider::{ProviderError, RandomWordProvider, ScriptedWordProvider, WordProvider};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), WORD_LENGTH, "Word '{word}' has the wrong length");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn list_is_large_enough_to_play() {
        assert!(WORDS_COUNT >= 100, "only {WORDS_COUNT} words embedded");
    }
}
