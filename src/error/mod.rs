//! Error module for Prefix Matches.
//!
//! Each component defines its own error enum; this module gathers them into
//! [`PrefixMatchesError`] and provides the reporting hook used by the binary.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::dictionary::DictionaryError;
use crate::source::SourceError;

pub mod config;

/// Result type alias used throughout Prefix Matches.
pub type PrefixMatchesResult<T> = Result<T, PrefixMatchesError>;

/// Core error enum for Prefix Matches.
#[derive(Error, Debug)]
pub enum PrefixMatchesError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the dictionary façade.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Errors reading a word source.
    #[error("Word source error: {0}")]
    Source(#[from] SourceError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: PrefixMatchesError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<E, S>(error: E, component: S) -> Self
    where
        E: Into<PrefixMatchesError>,
        S: Into<String>,
    {
        Self {
            error: error.into(),
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs through `tracing`.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Install the process-wide error reporter.
///
/// Only the first call takes effect; returns `false` if a reporter was
/// already installed, in which case the caller should log it.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    ERROR_REPORTER.set(reporter).is_ok()
}

/// Report an error through the installed reporter, or stderr if there is none.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
