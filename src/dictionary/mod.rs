//! In-memory prefix dictionary.
//!
//! [`PrefixMatches`] wraps any [`Trie`] and applies the dictionary policy on top
//! of it: whitespace splitting and a minimum term length on insertion, and a
//! minimum prefix length plus a word-length bound on queries.
//!
//! # Example
//!
//! ```
//! use prefix_matches_lib::dictionary::PrefixMatches;
//!
//! let mut dictionary = PrefixMatches::new();
//! assert_eq!(dictionary.add("abcd weqis weqosx skqm weqiox").unwrap(), 5);
//!
//! let matches: Vec<String> = dictionary.words_with_prefix("weq").unwrap().collect();
//! assert_eq!(matches, vec!["weqis"]);
//!
//! let matches: Vec<String> = dictionary.words_with_prefix_limited("weq", 4).unwrap().collect();
//! assert_eq!(matches, vec!["weqis", "weqiox", "weqosx"]);
//!
//! // Prefixes shorter than two characters never match
//! assert!(!dictionary.words_with_prefix_limited("w", 4).unwrap().has_next());
//! ```

mod error;
mod matches;

use tracing::{debug, info};

pub use error::{DictionaryError, DictionaryResult};
pub use matches::Matches;

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::trie::{RWayTrie, Trie, Tuple, WordIter};
use crate::error::PrefixMatchesResult;
use crate::source::WordSource;

/// Dictionary of words supporting length-bounded prefix queries.
#[derive(Debug)]
pub struct PrefixMatches<T: Trie = RWayTrie> {
    /// Backing word store
    trie: T,

    /// Insertion and query policy
    config: DictionaryConfig,
}

impl PrefixMatches<RWayTrie> {
    /// Creates an empty dictionary backed by an [`RWayTrie`].
    pub fn new() -> Self {
        Self::with_trie(RWayTrie::new())
    }
}

impl PrefixMatches<RWayTrie> {
    /// Builds a dictionary from every word of `source` under `config`.
    ///
    /// # Errors
    ///
    /// * `PrefixMatchesError::Source` - The word file could not be read.
    /// * `PrefixMatchesError::Dictionary` - The trie rejected one of its words.
    pub fn from_source(
        source: &WordSource,
        config: DictionaryConfig,
    ) -> PrefixMatchesResult<Self> {
        let words = source.words()?;
        let mut dictionary = Self::with_config(RWayTrie::new(), config);
        let added = dictionary.add_terms(&words)?;

        info!(
            path = %source.path().display(),
            added,
            size = dictionary.size(),
            "dictionary loaded"
        );
        Ok(dictionary)
    }
}

impl Default for PrefixMatches<RWayTrie> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Trie> PrefixMatches<T> {
    /// Creates a dictionary over `trie` with the default policy.
    pub fn with_trie(trie: T) -> Self {
        Self::with_config(trie, DictionaryConfig::default())
    }

    /// Creates a dictionary over `trie` with the given policy.
    ///
    /// # Arguments
    ///
    /// * `trie` - The backing word store.
    /// * `config` - Term and prefix length policy.
    pub fn with_config(trie: T, config: DictionaryConfig) -> Self {
        Self { trie, config }
    }

    /// Adds the terms of a single string. See [`PrefixMatches::add_terms`].
    pub fn add(&mut self, string: &str) -> DictionaryResult<usize> {
        self.add_terms([string])
    }

    /// Adds terms to the dictionary.
    ///
    /// Each string is split on runs of whitespace. Terms shorter than the
    /// configured minimum (three characters by default) are skipped silently.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of terms handed to the trie. Terms already
    ///   present are counted again.
    /// * `Err(DictionaryError)` - The trie rejected a term. Terms before it
    ///   remain inserted.
    pub fn add_terms<I, S>(&mut self, strings: I) -> DictionaryResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for string in strings {
            for term in string.as_ref().split_whitespace() {
                let tuple = Tuple::from_term(term);
                if tuple.weight() < self.config.min_term_length {
                    continue;
                }
                self.trie.add(tuple)?;
                count += 1;
            }
        }

        debug!(added = count, size = self.trie.size(), "added terms");
        Ok(count)
    }

    /// Returns `true` if `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> DictionaryResult<bool> {
        Ok(self.trie.contains(word)?)
    }

    /// Removes `word` from the dictionary, returning whether it was present.
    pub fn delete(&mut self, word: &str) -> DictionaryResult<bool> {
        Ok(self.trie.delete(word)?)
    }

    /// Number of words in the dictionary.
    pub fn size(&self) -> usize {
        self.trie.size()
    }

    /// Every word in the dictionary, in the trie's enumeration order.
    pub fn words(&self) -> WordIter<'_> {
        self.trie.words()
    }

    /// Words starting with `prefix` that are shorter than
    /// `prefix.len() + max_extra` characters.
    ///
    /// A prefix shorter than the configured minimum (two characters by
    /// default) yields an empty sequence, whatever is stored.
    pub fn words_with_prefix_limited(
        &self,
        prefix: &str,
        max_extra: usize,
    ) -> DictionaryResult<Matches<'_>> {
        let prefix_length = prefix.chars().count();
        if prefix_length < self.config.min_prefix_length {
            debug!(prefix, "prefix too short, no matches");
            return Ok(Matches::empty());
        }

        let source = self.trie.words_with_prefix(prefix)?;
        Ok(Matches::new(source, prefix_length.saturating_add(max_extra)))
    }

    /// Same as [`PrefixMatches::words_with_prefix_limited`] with the
    /// configured default `max_extra` (three unless configured otherwise).
    pub fn words_with_prefix(&self, prefix: &str) -> DictionaryResult<Matches<'_>> {
        self.words_with_prefix_limited(prefix, self.config.default_max_extra)
    }

    /// The backing trie.
    pub fn trie(&self) -> &T {
        &self.trie
    }

    /// The active policy.
    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }
}
