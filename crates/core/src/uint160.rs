//! Implementation of `UInt160`, the 160-bit script hash.

use crate::error::{PrimitiveError, PrimitiveResult};
use neo_sdk_config::ADDRESS_SIZE;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = ADDRESS_SIZE;

/// Represents a 160-bit unsigned integer stored little-endian.
///
/// Script hashes are displayed big-endian with a `0x` prefix and travel
/// through scripts in their little-endian byte order.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct UInt160([u8; UINT160_SIZE]);

impl UInt160 {
    /// Alias matching `UInt160.Length`.
    pub const LENGTH: usize = UINT160_SIZE;

    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT160_SIZE])
    }

    /// Checks if this `UInt160` is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Wraps little-endian bytes.
    #[inline]
    #[must_use]
    pub const fn from_array(bytes: [u8; UINT160_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a new `UInt160` from a little-endian byte slice.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidLength` if the input is not exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; UINT160_SIZE] =
            value.try_into().map_err(|_| PrimitiveError::InvalidLength {
                expected: UINT160_SIZE,
                actual: value.len(),
            })?;
        Ok(Self(bytes))
    }

    /// Gets the little-endian byte array.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.0
    }

    /// Returns the bytes as a `Vec<u8>`
    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Parses a `UInt160` from big-endian hex, with or without a `0x` prefix.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != UINT160_SIZE * 2 {
            return Err(PrimitiveError::format(format!(
                "expected {} hex characters, got {}",
                UINT160_SIZE * 2,
                s.len()
            )));
        }

        let mut bytes = hex::decode(s).map_err(|e| PrimitiveError::format(e.to_string()))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Converts the `UInt160` to a `0x`-prefixed big-endian hex string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }

    /// Converts this `UInt160` to a Base58Check address with the given version byte.
    #[must_use]
    pub fn to_address(&self, version: u8) -> String {
        let mut data = Vec::with_capacity(UINT160_SIZE + 5);
        data.push(version);
        data.extend_from_slice(&self.0);

        let checksum = checksum(&data);
        data.extend_from_slice(&checksum);

        bs58::encode(data).into_string()
    }

    /// Parses a Base58Check address string.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the address is not valid Base58,
    /// has an incorrect length, has a different version byte, or has a bad checksum.
    pub fn from_address(address: &str, version: u8) -> PrimitiveResult<Self> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|_| PrimitiveError::format("invalid Base58 address"))?;

        if decoded.len() != UINT160_SIZE + 5 {
            return Err(PrimitiveError::format("invalid address length"));
        }

        if decoded[0] != version {
            return Err(PrimitiveError::format(format!(
                "invalid address version 0x{:02x}",
                decoded[0]
            )));
        }

        let (data, check) = decoded.split_at(UINT160_SIZE + 1);
        if check != checksum(data) {
            return Err(PrimitiveError::format("invalid address checksum"));
        }

        Self::from_bytes(&data[1..])
    }
}

fn checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    [second[0], second[1], second[2], second[3]]
}

impl Ord for UInt160 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for UInt160 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl FromStr for UInt160 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for UInt160 {
    type Error = PrimitiveError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(value: [u8; UINT160_SIZE]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uint160_from_bytes() {
        let mut bytes = [0u8; UINT160_SIZE];
        bytes[0] = 1;
        let uint = UInt160::from_bytes(&bytes).unwrap();
        assert_eq!(uint.to_array()[0], 1);
        assert!(!uint.is_zero());
        assert!(UInt160::zero().is_zero());
    }

    #[test]
    fn test_uint160_from_bytes_wrong_length() {
        assert_eq!(
            UInt160::from_bytes(&[0u8; 19]),
            Err(PrimitiveError::InvalidLength {
                expected: 20,
                actual: 19
            })
        );
    }

    #[test]
    fn test_uint160_parse() {
        let uint = UInt160::parse("0x0000000000000000000000000000000000000001").unwrap();
        assert_eq!(uint.to_array()[0], 1);
        assert_eq!(uint.to_array()[19], 0);
        assert!(UInt160::parse("0x01").is_err());
        assert!(UInt160::parse("zz00000000000000000000000000000000000000").is_err());
    }

    #[test]
    fn test_uint160_to_hex_string() {
        let mut bytes = [0u8; UINT160_SIZE];
        bytes[19] = 0x01;
        let uint = UInt160::from_array(bytes);
        assert_eq!(
            uint.to_hex_string(),
            "0x0100000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_uint160_ordering_is_big_endian() {
        let mut low = [0u8; UINT160_SIZE];
        low[0] = 0xff;
        let mut high = [0u8; UINT160_SIZE];
        high[19] = 0x01;
        assert!(UInt160::from_array(high) > UInt160::from_array(low));
    }

    #[test]
    fn test_address_rejects_wrong_version() {
        let address = UInt160::zero().to_address(0x35);
        assert!(address.starts_with('N'));
        assert!(UInt160::from_address(&address, 0x17).is_err());
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let uint = UInt160::parse("0xd2a4cff31913016155e38e474a2c06d08be276cf").unwrap();
        let json = serde_json::to_string(&uint).unwrap();
        assert_eq!(json, "\"0xd2a4cff31913016155e38e474a2c06d08be276cf\"");
        let back: UInt160 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uint);
    }

    proptest! {
        #[test]
        fn prop_address_round_trip(bytes in prop::array::uniform20(any::<u8>())) {
            let uint = UInt160::from_array(bytes);
            let address = uint.to_address(0x35);
            prop_assert_eq!(UInt160::from_address(&address, 0x35).unwrap(), uint);
        }

        #[test]
        fn prop_hex_round_trip(bytes in prop::array::uniform20(any::<u8>())) {
            let uint = UInt160::from_array(bytes);
            prop_assert_eq!(UInt160::parse(&uint.to_hex_string()).unwrap(), uint);
        }
    }
}
