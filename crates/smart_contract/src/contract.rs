//! Contract - verification scripts for signature and multi-signature accounts.

use crate::contract_parameter_type::ContractParameterType;
use crate::error::{ContractError, ContractResult};
use crate::helper::compress_public_key;
use neo_sdk_config::{SdkConfig, COMPRESSED_PUBLIC_KEY_SIZE, MAX_MULTISIG_KEYS};
use neo_sdk_core::UInt160;
use neo_sdk_cryptography::EncodePoint;
use neo_sdk_vm::interop_service::{SYSTEM_CRYPTO_CHECK_MULTISIG, SYSTEM_CRYPTO_CHECK_SIG};
use neo_sdk_vm::{Script, ScriptBuilder};
use std::sync::OnceLock;
use tracing::debug;

/// A finalized verification script with the keys it checks.
///
/// `public_keys` is always in ascending byte order, whatever order the keys
/// were supplied in, so the script and its hash depend only on the key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationScript {
    threshold: usize,
    public_keys: Vec<[u8; COMPRESSED_PUBLIC_KEY_SIZE]>,
    script: Script,
}

impl VerificationScript {
    /// Number of signatures required.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn public_keys(&self) -> &[[u8; COMPRESSED_PUBLIC_KEY_SIZE]] {
        &self.public_keys
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn into_script(self) -> Script {
        self.script
    }

    /// The account identifier of the script.
    pub fn script_hash(&self) -> UInt160 {
        self.script.hash()
    }
}

/// Represents a contract that can be invoked.
#[derive(Clone, Debug)]
pub struct Contract {
    /// The script of the contract
    pub script: Script,

    /// The parameters of the contract
    pub parameter_list: Vec<ContractParameterType>,

    /// Cached script hash
    script_hash_cache: OnceLock<UInt160>,
}

impl PartialEq for Contract {
    fn eq(&self, other: &Self) -> bool {
        self.script == other.script && self.parameter_list == other.parameter_list
    }
}

impl Eq for Contract {}

impl Contract {
    /// Creates a new instance
    pub fn create(parameter_list: Vec<ContractParameterType>, redeem_script: Script) -> Self {
        Self {
            script: redeem_script,
            parameter_list,
            script_hash_cache: OnceLock::new(),
        }
    }

    /// Gets the hash of the contract
    pub fn script_hash(&self) -> UInt160 {
        *self.script_hash_cache.get_or_init(|| self.script.hash())
    }

    /// Gets the address of the contract for an address version byte
    pub fn address(&self, version: u8) -> String {
        self.script_hash().to_address(version)
    }

    /// Gets the address of the contract on the configured network
    pub fn address_for(&self, config: &SdkConfig) -> String {
        self.address(config.address_version)
    }

    /// Creates a signature contract
    pub fn create_signature_contract(public_key: &impl EncodePoint) -> ContractResult<Self> {
        let verification = Self::create_signature_redeem_script(&public_key.encode_point(true))?;
        Ok(Self::create(
            vec![ContractParameterType::Signature],
            verification.into_script(),
        ))
    }

    /// Creates a multi-sig contract
    pub fn create_multi_sig_contract<P: EncodePoint>(
        m: usize,
        public_keys: &[P],
    ) -> ContractResult<Self> {
        let encoded: Vec<Vec<u8>> = public_keys.iter().map(|k| k.encode_point(true)).collect();
        let verification = Self::create_multi_sig_redeem_script(m, &encoded)?;
        Ok(Self::create(
            vec![ContractParameterType::Signature; m],
            verification.into_script(),
        ))
    }

    /// Creates the script of a signature contract.
    ///
    /// Takes a 33-byte compressed or 65-byte uncompressed key; the script
    /// always carries the compressed form.
    pub fn create_signature_redeem_script(public_key: &[u8]) -> ContractResult<VerificationScript> {
        let key = compress_public_key(public_key)?;

        let mut builder = ScriptBuilder::new();
        builder
            .emit_push(&key)?
            .emit_syscall(SYSTEM_CRYPTO_CHECK_SIG)?;

        let script = builder.to_script();
        debug!(len = script.len(), "signature verification script built");
        Ok(VerificationScript {
            threshold: 1,
            public_keys: vec![key],
            script,
        })
    }

    /// Creates the script of an `m`-of-n multi-sig contract.
    pub fn create_multi_sig_redeem_script<K: AsRef<[u8]>>(
        m: usize,
        public_keys: &[K],
    ) -> ContractResult<VerificationScript> {
        Self::create_multi_sig_redeem_script_with_limit(m, public_keys, MAX_MULTISIG_KEYS)
    }

    /// Creates the script of a multi-sig contract bounded by the configured
    /// key limit.
    pub fn create_multi_sig_redeem_script_with_config<K: AsRef<[u8]>>(
        m: usize,
        public_keys: &[K],
        config: &SdkConfig,
    ) -> ContractResult<VerificationScript> {
        Self::create_multi_sig_redeem_script_with_limit(m, public_keys, config.max_multisig_keys)
    }

    fn create_multi_sig_redeem_script_with_limit<K: AsRef<[u8]>>(
        m: usize,
        public_keys: &[K],
        max_keys: usize,
    ) -> ContractResult<VerificationScript> {
        let n = public_keys.len();
        if n == 0 || n > max_keys {
            return Err(ContractError::invalid_argument(format!(
                "multi-sig needs 1 to {max_keys} keys, got {n}"
            )));
        }
        if !(1..=n).contains(&m) {
            return Err(ContractError::invalid_argument(format!(
                "threshold {m} out of range for {n} keys"
            )));
        }

        let mut sorted_keys = public_keys
            .iter()
            .map(|key| compress_public_key(key.as_ref()))
            .collect::<ContractResult<Vec<_>>>()?;
        sorted_keys.sort_unstable();
        if let Some(pair) = sorted_keys.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ContractError::invalid_argument(format!(
                "duplicate public key {}",
                hex::encode(pair[0])
            )));
        }

        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(m as i64)?;
        for key in &sorted_keys {
            builder.emit_push(key)?;
        }
        builder
            .emit_push_int(n as i64)?
            .emit_syscall(SYSTEM_CRYPTO_CHECK_MULTISIG)?;

        let script = builder.to_script();
        debug!(m, n, len = script.len(), "multi-sig verification script built");
        Ok(VerificationScript {
            threshold: m,
            public_keys: sorted_keys,
            script,
        })
    }
}

impl From<VerificationScript> for Contract {
    fn from(value: VerificationScript) -> Self {
        let parameter_list = vec![ContractParameterType::Signature; value.threshold];
        Self::create(parameter_list, value.script)
    }
}
