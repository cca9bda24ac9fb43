//! Error types for extraction and configuration parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Empty pattern, empty input text, or a pattern that failed to compile.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The pattern did not match, or a declared capture group was absent
    /// from the match.
    #[error("no match: {0}")]
    NoMatch(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown error policy: {0}")]
    UnknownPolicy(String),

    #[error("unknown field cleanup: {0}")]
    UnknownCleanup(String),
}
