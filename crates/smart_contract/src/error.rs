//! Error types for contract parameters and verification scripts.

use crate::contract_parameter_type::ContractParameterType;
use neo_sdk_core::PrimitiveError;
use neo_sdk_vm::VmError;
use thiserror::Error;

/// Errors raised while building parameters or contract scripts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Absent or out-of-range input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A public key or signature of the wrong size
    #[error("invalid key length: {0} bytes")]
    InvalidKeyLength(usize),

    /// A parameter variant that has no script encoding
    #[error("unsupported parameter variant: {0}")]
    UnsupportedVariant(ContractParameterType),

    /// A malformed JSON parameter
    #[error("invalid parameter format: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Vm(#[from] VmError),

    #[error(transparent)]
    Primitive(#[from] PrimitiveError),
}

/// Result type for contract operations
pub type ContractResult<T> = Result<T, ContractError>;

impl ContractError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }
}
