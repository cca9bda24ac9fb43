//! Error types for the HTTP fetch backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, timeout, or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("empty address")]
    EmptyAddress,
}
