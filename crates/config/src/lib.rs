//! Neo SDK Configuration Module
//!
//! Protocol constants shared by the script encoder and the account helpers,
//! plus the [`SdkConfig`] settings that callers may load from TOML.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Size of a hash (UInt256) in bytes
pub const HASH_SIZE: usize = 32;
/// Size of an address (UInt160) in bytes
pub const ADDRESS_SIZE: usize = 20;
/// Default address version byte
pub const ADDRESS_VERSION: u8 = 0x35;
/// Size of a compressed public key
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;
/// Size of an uncompressed public key
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;
/// Size of a raw signature (r || s)
pub const SIGNATURE_SIZE: usize = 64;
/// Upper bound on the number of keys in a multi-signature account
pub const MAX_MULTISIG_KEYS: usize = 255;
/// Longest direct push; the length byte doubles as the instruction code
pub const MAX_DIRECT_PUSH_LENGTH: usize = 75;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for [`SdkConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting is outside its permitted range
    #[error("invalid setting `{field}`: {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Network type for Neo blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    MainNet,
    #[default]
    TestNet,
    Private,
}

impl NetworkType {
    /// Gets the network magic number
    pub fn magic(&self) -> u32 {
        match self {
            NetworkType::MainNet => 0x334f454e, // "NEO3" in little endian
            NetworkType::TestNet => 0x3554334e,
            NetworkType::Private => 0x00000000,
        }
    }

    /// Gets the address version
    pub fn address_version(&self) -> u8 {
        ADDRESS_VERSION
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::Private => write!(f, "private"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            "private" | "privnet" => Ok(NetworkType::Private),
            _ => Err(format!("Unknown network type: {}", s)),
        }
    }
}

/// SDK settings consumed by address derivation and account construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    pub network: NetworkType,
    pub address_version: u8,
    /// Overrides the network magic of `network` when set
    pub network_magic: Option<u32>,
    pub max_multisig_keys: usize,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            network: NetworkType::default(),
            address_version: ADDRESS_VERSION,
            network_magic: None,
            max_multisig_keys: MAX_MULTISIG_KEYS,
        }
    }
}

impl SdkConfig {
    /// Parses settings from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: SdkConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), network = %config.network, "loaded sdk config");
        Ok(config)
    }

    /// The network magic in effect.
    pub fn magic(&self) -> u32 {
        self.network_magic.unwrap_or_else(|| self.network.magic())
    }

    /// Checks that every setting is inside its protocol range.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_multisig_keys == 0 || self.max_multisig_keys > MAX_MULTISIG_KEYS {
            return Err(ConfigError::InvalidValue {
                field: "max_multisig_keys",
                message: format!(
                    "must be in 1..={}, got {}",
                    MAX_MULTISIG_KEYS, self.max_multisig_keys
                ),
            });
        }
        Ok(())
    }
}
