//! Dictionary policy configuration module.
//!
//! This module defines the length thresholds the dictionary applies when
//! accepting terms and answering prefix queries.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Insertion and query policy for the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Terms with fewer characters than this are dropped on insertion
    pub min_term_length: usize,

    /// Prefixes with fewer characters than this match nothing
    pub min_prefix_length: usize,

    /// Extra characters allowed past the prefix when none is given
    pub default_max_extra: usize,
}

impl DictionaryConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum accepted term length.
    pub fn with_min_term_length(mut self, min_term_length: usize) -> Self {
        self.min_term_length = min_term_length;
        self
    }

    /// Sets the minimum prefix length for queries.
    pub fn with_min_prefix_length(mut self, min_prefix_length: usize) -> Self {
        self.min_prefix_length = min_prefix_length;
        self
    }

    /// Sets the default number of extra characters allowed past the prefix.
    pub fn with_default_max_extra(mut self, default_max_extra: usize) -> Self {
        self.default_max_extra = default_max_extra;
        self
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            min_term_length: 3,   // two-letter terms are dropped
            min_prefix_length: 2,
            default_max_extra: 3,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        // The trie rejects empty terms
        if self.min_term_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.min_term_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.min_prefix_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.min_prefix_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
