//! Data structures for Prefix Matches.
//!
//! Word stores backing the dictionary. All implementations are safe code and
//! designed for single-writer, single-threaded use.

pub mod trie;

// Re-export common data structures
pub use trie::{RWayTrie, Trie, TrieError, TrieResult, Tuple};
