//! Cryptography errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Encoded point has a length other than 33 or 65 bytes
    #[error("invalid public key length: {0} bytes")]
    InvalidKeyLength(usize),

    /// Bytes do not describe a point on the curve
    #[error("invalid public key: {0}")]
    InvalidPoint(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
