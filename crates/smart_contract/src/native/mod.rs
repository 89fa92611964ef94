//! Native token contracts.

pub mod nep17;

pub use nep17::Nep17Token;

use neo_sdk_core::UInt160;

/// Script hash of the native NEO token, `0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5`.
pub const NEO_TOKEN_HASH: UInt160 = UInt160::from_array([
    0xf5, 0x63, 0xea, 0x40, 0xbc, 0x28, 0x3d, 0x4d, 0x0e, 0x05, 0xc4, 0x8e, 0xa3, 0x05, 0xb3, 0xf2,
    0xa0, 0x73, 0x40, 0xef,
]);

/// Script hash of the native GAS token, `0xd2a4cff31913016155e38e474a2c06d08be276cf`.
pub const GAS_TOKEN_HASH: UInt160 = UInt160::from_array([
    0xcf, 0x76, 0xe2, 0x8b, 0xd0, 0x06, 0x2c, 0x4a, 0x47, 0x8e, 0xe3, 0x55, 0x61, 0x01, 0x13, 0x19,
    0xf3, 0xcf, 0xa4, 0xd2,
]);
