//! Public-key normalisation and verification-script recognition.

use crate::error::{ContractError, ContractResult};
use neo_sdk_config::{COMPRESSED_PUBLIC_KEY_SIZE, UNCOMPRESSED_PUBLIC_KEY_SIZE};
use neo_sdk_vm::interop_service::{SYSTEM_CRYPTO_CHECK_MULTISIG, SYSTEM_CRYPTO_CHECK_SIG};
use neo_sdk_vm::{Instruction, Instructions, OpCode};

/// Returns the 33-byte compressed encoding of a SEC1 public key.
///
/// A 65-byte `0x04` key is compressed structurally from the parity of its Y
/// coordinate. The point is not checked against the curve, so callers holding
/// untrusted key bytes must validate them first, for example by decoding
/// through [`ECPoint::from_bytes`] and passing its encoding instead.
///
/// [`ECPoint::from_bytes`]: neo_sdk_cryptography::ECPoint::from_bytes
pub fn compress_public_key(bytes: &[u8]) -> ContractResult<[u8; COMPRESSED_PUBLIC_KEY_SIZE]> {
    let mut out = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
    match bytes.len() {
        COMPRESSED_PUBLIC_KEY_SIZE => {
            if bytes[0] != 0x02 && bytes[0] != 0x03 {
                return Err(ContractError::invalid_argument(format!(
                    "compressed public key has prefix 0x{:02x}",
                    bytes[0]
                )));
            }
            out.copy_from_slice(bytes);
        }
        UNCOMPRESSED_PUBLIC_KEY_SIZE => {
            if bytes[0] != 0x04 {
                return Err(ContractError::invalid_argument(format!(
                    "uncompressed public key has prefix 0x{:02x}",
                    bytes[0]
                )));
            }
            out[0] = 0x02 | (bytes[UNCOMPRESSED_PUBLIC_KEY_SIZE - 1] & 1);
            out[1..].copy_from_slice(&bytes[1..COMPRESSED_PUBLIC_KEY_SIZE]);
        }
        len => return Err(ContractError::InvalidKeyLength(len)),
    }
    Ok(out)
}

fn is_syscall(instruction: &Instruction<'_>, name: &str) -> bool {
    instruction.syscall_name() == Some(name)
}

fn as_public_key(instruction: &Instruction<'_>) -> Option<[u8; COMPRESSED_PUBLIC_KEY_SIZE]> {
    if instruction.opcode()? != OpCode::PUSHBYTES33 {
        return None;
    }
    instruction.operand.try_into().ok()
}

/// Whether `script` is a single-signature verification script.
pub fn is_signature_contract(script: &[u8]) -> bool {
    let mut instructions = Instructions::new(script);
    let (Some(key), Some(syscall), None) = (
        instructions.next(),
        instructions.next(),
        instructions.next(),
    ) else {
        return false;
    };
    if instructions.is_truncated() {
        return false;
    }
    as_public_key(&key).is_some() && is_syscall(&syscall, SYSTEM_CRYPTO_CHECK_SIG)
}

/// Parses a multi-signature verification script into its threshold and
/// keys, in script order.
pub fn is_multi_sig_contract(
    script: &[u8],
) -> Option<(usize, Vec<[u8; COMPRESSED_PUBLIC_KEY_SIZE]>)> {
    let mut instructions = Instructions::new(script);
    let threshold = usize::try_from(instructions.next()?.push_integer()?).ok()?;

    let mut keys = Vec::new();
    let count = loop {
        let instruction = instructions.next()?;
        match as_public_key(&instruction) {
            Some(key) => keys.push(key),
            None => break usize::try_from(instruction.push_integer()?).ok()?,
        }
    };

    let syscall = instructions.next()?;
    if instructions.next().is_some() || instructions.is_truncated() {
        return None;
    }
    if !is_syscall(&syscall, SYSTEM_CRYPTO_CHECK_MULTISIG) {
        return None;
    }
    if count != keys.len() || threshold == 0 || threshold > count {
        return None;
    }
    Some((threshold, keys))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_passthrough() {
        let mut key = [0x11u8; 33];
        key[0] = 0x03;
        assert_eq!(compress_public_key(&key).unwrap(), key);
    }

    #[test]
    fn test_compress_uncompressed() {
        let mut key = [0x22u8; 65];
        key[0] = 0x04;
        key[64] = 0x01;
        let compressed = compress_public_key(&key).unwrap();
        assert_eq!(compressed[0], 0x03);
        assert_eq!(&compressed[1..], &key[1..33]);

        key[64] = 0x02;
        assert_eq!(compress_public_key(&key).unwrap()[0], 0x02);
    }

    #[test]
    fn test_compress_rejects() {
        assert_eq!(
            compress_public_key(&[0x02; 32]),
            Err(ContractError::InvalidKeyLength(32))
        );
        assert!(matches!(
            compress_public_key(&[0x04; 33]),
            Err(ContractError::InvalidArgument(_))
        ));
        assert!(matches!(
            compress_public_key(&[0x02; 65]),
            Err(ContractError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_not_contracts() {
        assert!(!is_signature_contract(&[]));
        assert!(!is_signature_contract(&[0x51, 0x66]));
        assert!(is_multi_sig_contract(&[]).is_none());
        assert!(is_multi_sig_contract(&[0x51, 0x51]).is_none());
    }
}
