//! Length-bounded match iterator.

use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

use super::error::{DictionaryError, DictionaryResult};
use crate::data_structures::trie::WordIter;

/// Lazy sequence of prefix matches shorter than a length bound.
///
/// Holds at most one pre-fetched word so that [`Matches::has_next`] can answer
/// without consuming anything.
pub struct Matches<'a> {
    source: WordIter<'a>,

    /// Exclusive upper bound on the character count of emitted words
    limit: usize,

    /// Next qualifying word, fetched but not yet handed out
    lookahead: Option<String>,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(source: WordIter<'a>, limit: usize) -> Self {
        Self {
            source,
            limit,
            lookahead: None,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Box::new(std::iter::empty::<String>()), 0)
    }

    /// Returns `true` if another match is available.
    ///
    /// Pre-fetches the next qualifying word on first call; repeated calls do
    /// not advance the sequence. Never fails at the end of the sequence.
    pub fn has_next(&mut self) -> bool {
        if self.lookahead.is_none() {
            let limit = self.limit;
            self.lookahead = self.source.find(|word| word.chars().count() < limit);
        }
        self.lookahead.is_some()
    }

    /// Advances to the next match.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The next matching word.
    /// * `Err(DictionaryError::EndOfSequence)` - The sequence is exhausted.
    pub fn try_next(&mut self) -> DictionaryResult<String> {
        self.has_next();
        self.lookahead.take().ok_or(DictionaryError::EndOfSequence)
    }
}

impl Iterator for Matches<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.try_next().ok()
    }
}

impl FusedIterator for Matches<'_> {}

impl Debug for Matches<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matches")
            .field("limit", &self.limit)
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}
