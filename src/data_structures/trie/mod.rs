// Copyright (c) 2025 Prefix Matches Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Trie engine.
//!
//! This module defines the [`Trie`] capability set consumed by the dictionary
//! façade, together with [`RWayTrie`], the fixed-alphabet implementation
//! backing it.
//!
//! # Example
//!
//! ```
//! use prefix_matches_lib::data_structures::trie::{RWayTrie, Trie, Tuple};
//!
//! let mut trie = RWayTrie::new();
//! trie.add(Tuple::from_term("tupleone")).unwrap();
//! trie.add(Tuple::from_term("tupletwo")).unwrap();
//!
//! assert!(trie.contains("tupleone").unwrap());
//! assert!(!trie.contains("tuple").unwrap());
//!
//! let words: Vec<String> = trie.words_with_prefix("tuple").unwrap().collect();
//! assert_eq!(words, vec!["tupleone", "tupletwo"]);
//! ```

mod error;
mod iter;
mod node;
mod rway;

pub use error::{TrieError, TrieResult};
pub use iter::Words;
pub use node::{TrieNode, RADIX};
pub use rway::RWayTrie;

/// Boxed lazy sequence of words borrowed from a trie.
pub type WordIter<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// A term paired with the number of its characters to store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuple<'a> {
    term: &'a str,
    weight: usize,
}

impl<'a> Tuple<'a> {
    /// Creates a tuple storing the first `weight` characters of `term`.
    pub fn new(term: &'a str, weight: usize) -> Self {
        Self { term, weight }
    }

    /// Creates a tuple storing the whole of `term`.
    pub fn from_term(term: &'a str) -> Self {
        Self::new(term, term.chars().count())
    }

    /// The backing term.
    pub fn term(&self) -> &'a str {
        self.term
    }

    /// Number of characters of the term to store.
    pub fn weight(&self) -> usize {
        self.weight
    }
}

/// Operations a word store must provide to back a dictionary.
///
/// Enumerations borrow the store immutably, so no insertion or deletion can
/// happen while one is being consumed.
pub trait Trie {
    /// Inserts the first `tuple.weight()` characters of `tuple.term()`.
    ///
    /// Re-inserting a word already present leaves [`Trie::size`] unchanged.
    fn add(&mut self, tuple: Tuple<'_>) -> TrieResult<()>;

    /// Returns `true` if `word` was stored as a whole word.
    fn contains(&self, word: &str) -> TrieResult<bool>;

    /// Removes `word`, pruning branches no other word uses.
    ///
    /// Returns `false` when `word` is absent, including when it is only a
    /// prefix of stored words.
    fn delete(&mut self, word: &str) -> TrieResult<bool>;

    /// Every stored word, breadth-first, alphabetical within a level.
    fn words(&self) -> WordIter<'_>;

    /// Every stored word starting with `prefix`, in the same order as [`Trie::words`].
    fn words_with_prefix(&self, prefix: &str) -> TrieResult<WordIter<'_>>;

    /// Number of stored words.
    fn size(&self) -> usize;

    /// Returns `true` if no word is stored.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
