//! Common error types for the skillmatch host.

use skillmatch_core::MatchError;
use thiserror::Error;

/// Common error type for host-side operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Engine rejected its configuration
    #[error("matcher error: {0}")]
    Match(#[from] MatchError),

    /// Vocabulary file could not be used
    #[error("vocabulary error: {0}")]
    Vocabulary(String),
}

/// Result type alias using the host Error.
pub type Result<T> = std::result::Result<T, Error>;
