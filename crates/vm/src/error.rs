//! Error types for script encoding.

use thiserror::Error;

/// Errors raised by the script encoder.
///
/// A builder that returned an error must be discarded or reset; its buffer
/// is left exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// Absent or out-of-range input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The script buffer could not grow
    #[error("allocation failure: could not reserve {requested} more bytes")]
    AllocationFailure { requested: usize },
}

/// Result type for VM operations
pub type VmResult<T> = Result<T, VmError>;

impl VmError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
