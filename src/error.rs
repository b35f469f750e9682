//! Error types for Cinesearch
//!
//! This module defines the error types used throughout the application,
//! using `thiserror` for ergonomic error handling.
//!
//! Two layers exist:
//!
//! - [`SearchClientError`] is what a search client reports for a single
//!   fetch. The controller turns it into a failed session state and never
//!   lets it escape further.
//! - [`CinesearchError`] covers everything else the binary can run into
//!   (configuration, IO, terminal input) and travels through `anyhow`.

use thiserror::Error;

/// Failure of a single search request
///
/// Both variants end up in the session as a `Failed` status with the
/// display text as the error message. They are kept apart so callers that
/// talk to the client directly (the one-shot `search` command) can tell an
/// empty result set from a broken network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchClientError {
    /// Network unreachable, timeout, non-2xx status or undecodable body
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote API reported no matches (or rejected the query)
    #[error("{0}")]
    NoResults(String),
}

impl SearchClientError {
    /// Returns true when the remote answered but found nothing
    pub fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults(_))
    }
}

impl From<reqwest::Error> for SearchClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("request timed out: {}", err))
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Main error type for Cinesearch operations
#[derive(Error, Debug)]
pub enum CinesearchError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Search client errors surfaced outside of the controller
    #[error("Search failed: {0}")]
    Client(#[from] SearchClientError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Interactive prompt errors
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result type alias for Cinesearch operations
///
/// Uses `anyhow::Error` so command handlers can attach context while
/// still carrying a [`CinesearchError`] underneath.
pub type Result<T> = anyhow::Result<T>;
