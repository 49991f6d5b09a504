//! Prefix Matches Library
//!
//! An in-memory prefix dictionary. Words are stored in an R-way trie over the
//! lowercase Latin alphabet and queried by prefix, with results bounded in
//! length and produced lazily in breadth-first order.
//!
//! # Architecture
//!
//! - [`data_structures::trie`]: the [`Trie`](data_structures::trie::Trie)
//!   capability set and the [`RWayTrie`](data_structures::trie::RWayTrie) engine
//! - [`dictionary`]: the [`PrefixMatches`](dictionary::PrefixMatches) façade
//!   applying the insertion and query policy
//! - [`source`]: reading words from text files
//! - [`config`] and [`error`]: ambient configuration and error handling

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod source;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Prefix Matches.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
