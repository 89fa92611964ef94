//! Finalized script bytes.

use crate::disassembler::Disassembler;
use crate::instruction::Instructions;
use bytes::Bytes;
use neo_sdk_core::UInt160;
use std::fmt;
use std::ops::Deref;

/// An immutable, cheaply cloneable script produced by [`ScriptBuilder`].
///
/// [`ScriptBuilder`]: crate::ScriptBuilder
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Bytes);

impl Script {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Hash160 of the script bytes, the account identifier of a
    /// verification script.
    pub fn hash(&self) -> UInt160 {
        neo_sdk_cryptography::script_hash(&self.0)
    }

    /// Decodes the script instruction by instruction.
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions::new(&self.0)
    }

    /// Renders a mnemonic listing of the script.
    pub fn disassemble(&self) -> String {
        Disassembler::new(&self.0).render()
    }

    pub fn to_hex_string(&self) -> String {
        hex::encode(&self.0)
    }
}

impl Deref for Script {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Script {
    fn from(value: Vec<u8>) -> Self {
        Self(Bytes::from(value))
    }
}

impl From<&[u8]> for Script {
    fn from(value: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(value))
    }
}

impl From<Script> for Vec<u8> {
    fn from(value: Script) -> Self {
        value.0.to_vec()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_hex() {
        let script = Script::from(vec![0x51, 0x66]);
        assert_eq!(script.to_string(), "5166");
        assert_eq!(format!("{script:?}"), "Script(5166)");
        assert_eq!(script.len(), 2);
        assert_eq!(&script[..], &[0x51, 0x66]);
    }

    #[test]
    fn test_clone_shares_bytes() {
        let script = Script::from(vec![1, 2, 3, 4]);
        let copy = script.clone();
        assert_eq!(script.as_bytes().as_ptr(), copy.as_bytes().as_ptr());
    }

    #[test]
    fn test_hash_matches_hash160() {
        let script = Script::from(vec![0x51]);
        assert_eq!(
            script.hash().to_array(),
            neo_sdk_cryptography::hash160(&[0x51])
        );
    }
}
