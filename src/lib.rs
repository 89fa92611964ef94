//! # Neo SDK: script building for the Neo N3 blockchain
//!
//! Everything needed to turn typed call arguments into executable scripts:
//! - Instruction and syscall catalogs
//! - A script encoder with canonical integer and byte-string pushes
//! - Contract invocation and NEP-17 token scripts
//! - Single- and multi-signature verification scripts
//! - A disassembler for inspecting any script
//!
//! ## Quick Start
//!
//! ```rust
//! use neo_sdk::prelude::*;
//!
//! # fn main() -> Result<(), ContractError> {
//! let script = Nep17Token::gas().balance_of_script(&UInt160::zero())?;
//! println!("{}", script.disassemble());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - protocol constants and `SdkConfig`
//! - [`primitives`] - `UInt160` / `UInt256` and address encoding
//! - [`crypto`] - hashing and public-key encoding
//! - [`vm`] - catalogs, `ScriptBuilder`, `Script` and the disassembler
//! - [`smart_contract`] - `ContractParameter`, contract calls and verification scripts

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Re-export all public APIs from member crates
pub use neo_sdk_config as config;
pub use neo_sdk_core as primitives;
pub use neo_sdk_cryptography as crypto;
pub use neo_sdk_smart_contract as smart_contract;
pub use neo_sdk_vm as vm;

pub mod logging;

/// Common imports for script building
pub mod prelude {
    pub use crate::config::{NetworkType, SdkConfig};
    pub use crate::crypto::{ECPoint, EncodePoint};
    pub use crate::primitives::{UInt160, UInt256};
    pub use crate::smart_contract::{
        assemble_contract_call, Contract, ContractError, ContractParameter, ContractParameterType,
        Nep17Token, ScriptBuilderExt, VerificationScript,
    };
    pub use crate::vm::{
        CallFlags, Disassembler, InteropService, OpCode, Script, ScriptBuilder, VmError,
    };
}

/// Neo SDK version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
