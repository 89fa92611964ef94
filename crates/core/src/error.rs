//! Errors for primitive parsing and conversion.

use thiserror::Error;

/// Errors produced by the primitive types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// Input had the wrong byte length
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input text was not in the expected format
    #[error("invalid format: {message}")]
    InvalidFormat { message: String },
}

/// Result alias for primitive operations.
pub type PrimitiveResult<T> = Result<T, PrimitiveError>;

impl PrimitiveError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}
