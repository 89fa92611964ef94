//! Public-key point encoding over secp256r1.
//!
//! Verification scripts only ever see the SEC1 encoding of a key, so this
//! module exposes exactly that: decode from 33/65 bytes, encode to either form.

use crate::error::{CryptoError, CryptoResult};
use neo_sdk_config::{COMPRESSED_PUBLIC_KEY_SIZE, UNCOMPRESSED_PUBLIC_KEY_SIZE};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::PublicKey;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Encodes a curve point to its SEC1 byte form.
pub trait EncodePoint {
    /// Returns 33 bytes when `compressed`, 65 bytes otherwise.
    fn encode_point(&self, compressed: bool) -> Vec<u8>;
}

/// A validated secp256r1 public key.
#[derive(Clone, PartialEq, Eq)]
pub struct ECPoint {
    inner: PublicKey,
    compressed: [u8; COMPRESSED_PUBLIC_KEY_SIZE],
}

impl ECPoint {
    /// Decodes a SEC1 point, compressed or uncompressed.
    ///
    /// Only the `0x02`/`0x03` (33-byte) and `0x04` (65-byte) tags are
    /// accepted. Other SEC1 tags such as the compact `0x05` form are rejected.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let prefix_ok = match bytes.len() {
            COMPRESSED_PUBLIC_KEY_SIZE => matches!(bytes[0], 0x02 | 0x03),
            UNCOMPRESSED_PUBLIC_KEY_SIZE => bytes[0] == 0x04,
            len => return Err(CryptoError::InvalidKeyLength(len)),
        };
        if !prefix_ok {
            return Err(CryptoError::InvalidPoint(format!(
                "unexpected SEC1 prefix 0x{:02x} for a {}-byte key",
                bytes[0],
                bytes.len()
            )));
        }
        let inner = PublicKey::from_sec1_bytes(bytes)
            .map_err(|e| CryptoError::InvalidPoint(e.to_string()))?;
        Ok(Self::from_public_key(inner))
    }

    /// Wraps an existing `p256` key.
    pub fn from_public_key(inner: PublicKey) -> Self {
        let mut compressed = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
        compressed.copy_from_slice(inner.to_encoded_point(true).as_bytes());
        Self { inner, compressed }
    }

    /// The 33-byte compressed encoding.
    pub fn compressed(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_SIZE] {
        &self.compressed
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.inner
    }
}

impl EncodePoint for ECPoint {
    fn encode_point(&self, compressed: bool) -> Vec<u8> {
        if compressed {
            self.compressed.to_vec()
        } else {
            self.inner.to_encoded_point(false).as_bytes().to_vec()
        }
    }
}

impl EncodePoint for PublicKey {
    fn encode_point(&self, compressed: bool) -> Vec<u8> {
        self.to_encoded_point(compressed).as_bytes().to_vec()
    }
}

impl Ord for ECPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compressed.cmp(&other.compressed)
    }
}

impl PartialOrd for ECPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ECPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ECPoint({})", hex::encode(self.compressed))
    }
}

impl fmt::Display for ECPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.compressed))
    }
}

impl FromStr for ECPoint {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| CryptoError::InvalidPoint(e.to_string()))?;
        Self::from_bytes(&bytes)
    }
}
