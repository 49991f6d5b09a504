// Copyright (c) 2025 Prefix Matches Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for trie operations.
//!
//! Every variant is an argument fault: the caller handed the trie something it
//! cannot store or walk. None of them are recovered internally.

/// Errors that can occur in trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// Error when an empty term (or a term length of zero) is inserted.
    #[error("Empty term not allowed")]
    EmptyTerm,

    /// Error when an argument contains a character outside `a..=z`.
    #[error("Invalid character '{character}' in '{word}': only 'a'..='z' is supported")]
    InvalidCharacter {
        /// The offending argument.
        word: String,
        /// The first character that has no slot in the trie.
        character: char,
    },

    /// Error when the requested length exceeds the characters available in the term.
    #[error("Length {length} is out of range for term '{term}'")]
    LengthOutOfRange {
        /// The term that was too short.
        term: String,
        /// The requested length.
        length: usize,
    },
}

impl TrieError {
    pub(crate) fn invalid_character(word: &str, character: char) -> Self {
        Self::InvalidCharacter {
            word: word.to_string(),
            character,
        }
    }
}

/// Result type for trie operations.
pub type TrieResult<T> = Result<T, TrieError>;
