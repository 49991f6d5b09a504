//! Word source configuration module.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Settings for reading words from text files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Lowercase accepted tokens before they reach the dictionary
    pub fold_case: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { fold_case: true }
    }
}

impl Validate for SourceConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
