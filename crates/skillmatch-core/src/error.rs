//! Engine error types

use thiserror::Error;

/// Errors raised while configuring the extractor or decoding JSON input.
///
/// Extraction itself is total; these only surface from validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Cutoff outside 0..=100
    #[error("cutoff must be within 0..=100, got {0}")]
    InvalidCutoff(u16),

    /// Window size of zero
    #[error("window size must be at least 1, got {0}")]
    InvalidWindow(usize),

    /// Malformed input at the JSON boundary
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for engine configuration
pub type MatchResult<T> = Result<T, MatchError>;
