//! Error types for the dictionary façade.

use crate::data_structures::trie::TrieError;

/// Errors that can occur in dictionary operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    /// The backing trie rejected an argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] TrieError),

    /// A match iterator was advanced past its last element.
    #[error("No more matching words")]
    EndOfSequence,
}

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;
