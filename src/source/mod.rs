//! Word sources.
//!
//! Reads whitespace-separated text and keeps the purely alphabetic tokens,
//! producing the term strings the dictionary accepts.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::source::SourceConfig;

/// Errors that can occur reading a word source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read.
    #[error("Failed to read word file {path:?}: {source}")]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for word source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Returns `true` if `token` is non-empty and made of ASCII letters only.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Alphabetic tokens of `text`, optionally lowercased.
pub fn tokens(text: &str, fold_case: bool) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter(|t| is_word(t)).map(move |t| {
        if fold_case {
            t.to_ascii_lowercase()
        } else {
            t.to_string()
        }
    })
}

/// A text file of words.
#[derive(Debug, Clone)]
pub struct WordSource {
    path: PathBuf,
    fold_case: bool,
}

impl WordSource {
    /// Creates a source for `path` with the default settings.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(path, &SourceConfig::default())
    }

    /// Creates a source for `path` with the given settings.
    pub fn with_config<P: AsRef<Path>>(path: P, config: &SourceConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            fold_case: config.fold_case,
        }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file and returns its words in order.
    pub fn words(&self) -> SourceResult<Vec<String>> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        let words: Vec<String> = tokens(&text, self.fold_case).collect();
        debug!(path = ?self.path, words = words.len(), "read word file");
        Ok(words)
    }

    /// Reads the file and returns its words joined by single spaces.
    pub fn parse(&self) -> SourceResult<String> {
        Ok(self.words()?.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("word", true ; "lowercase")]
    #[test_case("Word", true ; "capitalised")]
    #[test_case("can't", false ; "apostrophe")]
    #[test_case("abc1", false ; "digit")]
    #[test_case("", false ; "empty")]
    #[test_case("naïve", false ; "non ascii")]
    fn test_is_word(token: &str, expected: bool) {
        assert_eq!(is_word(token), expected);
    }

    #[test]
    fn test_tokens_filter_and_fold() {
        let text = "The quick\nbrown fox's  42 jumps\t";
        let folded: Vec<String> = tokens(text, true).collect();
        assert_eq!(folded, vec!["the", "quick", "brown", "jumps"]);

        let kept: Vec<String> = tokens(text, false).collect();
        assert_eq!(kept, vec!["The", "quick", "brown", "jumps"]);
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "alpha Beta\ngamma 123\n").unwrap();

        let source = WordSource::new(&path);
        assert_eq!(source.parse().unwrap(), "alpha beta gamma");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordSource::new(dir.path().join("missing.txt"));
        assert!(matches!(source.words(), Err(SourceError::Read { .. })));
    }
}
