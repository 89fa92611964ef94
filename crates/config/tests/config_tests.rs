//! Configuration loading tests.

use neo_sdk_config::{ConfigError, NetworkType, SdkConfig, MAX_MULTISIG_KEYS};
use std::io::Write;

#[test]
fn test_partial_toml_uses_defaults() {
    let config = SdkConfig::from_toml_str("network = \"mainnet\"\n").unwrap();
    assert_eq!(config.network, NetworkType::MainNet);
    assert_eq!(config.address_version, 0x35);
    assert_eq!(config.max_multisig_keys, MAX_MULTISIG_KEYS);
    assert_eq!(config.magic(), 0x334f454e);
}

#[test]
fn test_magic_override() {
    let config = SdkConfig::from_toml_str("network = \"private\"\nnetwork_magic = 1234\n").unwrap();
    assert_eq!(config.magic(), 1234);
}

#[test]
fn test_rejects_out_of_range_multisig_limit() {
    let err = SdkConfig::from_toml_str("max_multisig_keys = 256\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "max_multisig_keys",
            ..
        }
    ));

    let err = SdkConfig::from_toml_str("max_multisig_keys = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_rejects_malformed_toml() {
    let err = SdkConfig::from_toml_str("network = [").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "network = \"testnet\"").unwrap();
    writeln!(file, "address_version = 23").unwrap();

    let config = SdkConfig::load(file.path()).unwrap();
    assert_eq!(config.network, NetworkType::TestNet);
    assert_eq!(config.address_version, 23);
}

#[test]
fn test_load_missing_file() {
    let err = SdkConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_config_json_round_trip_keeps_network_name() {
    let json = serde_json::to_string(&SdkConfig::default()).unwrap();
    assert!(json.contains("\"testnet\""));
}
