//! Hash functions for Neo cryptography.
//!
//! The script layer only needs Hash160 (RIPEMD-160 of SHA-256), which turns
//! a finalized script into its account identifier.

use neo_sdk_core::UInt160;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Computes SHA-256 hash of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes RIPEMD-160 hash of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes Hash160 (RIPEMD-160 of SHA-256) of the input data.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Computes the script hash that identifies an account or contract.
pub fn script_hash(script: &[u8]) -> UInt160 {
    UInt160::from_array(hash160(script))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_sha256() {
        assert_eq!(
            sha256(b"hello world"),
            hex!("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")
        );
    }

    #[test]
    fn test_ripemd160_empty() {
        assert_eq!(ripemd160(b""), hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31"));
    }

    #[test]
    fn test_hash160_composes() {
        let data = b"neo";
        assert_eq!(hash160(data), ripemd160(&sha256(data)));
        assert_eq!(script_hash(data).to_array(), hash160(data));
    }
}
