//! Test modules for Prefix Matches.
//!
//! Crate-internal suites that need access to test fixtures:
//! - Property-based tests for the trie engine
//! - Dictionary policy tests against substitute tries
//! - Configuration loading and error reporting tests
