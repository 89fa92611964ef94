//! # Neo SDK Smart Contract
//!
//! Contract call arguments and the scripts built from them:
//!
//! - [`ContractParameter`]: typed call arguments with a JSON form
//! - [`ScriptBuilderExt`]: typed pushes and `System.Contract.Call` assembly
//! - [`Contract`] / [`VerificationScript`]: signature and multi-signature
//!   account scripts
//! - [`helper`]: recognising verification scripts
//! - [`native`]: NEP-17 helpers for the native NEO and GAS tokens
//!
//! ```rust
//! use neo_sdk_smart_contract::{ContractParameter, ScriptBuilderExt};
//! use neo_sdk_core::UInt160;
//! use neo_sdk_vm::{CallFlags, ScriptBuilder};
//!
//! # fn main() -> Result<(), neo_sdk_smart_contract::ContractError> {
//! let mut sb = ScriptBuilder::new();
//! sb.emit_dynamic_call(
//!     &UInt160::zero(),
//!     "balanceOf",
//!     CallFlags::READ_ONLY,
//!     &[ContractParameter::hash160(UInt160::zero())],
//! )?;
//! assert!(sb.to_script().disassemble().ends_with("SYSCALL System.Contract.Call\n"));
//! # Ok(())
//! # }
//! ```

pub mod contract;
pub mod contract_parameter;
pub mod contract_parameter_type;
pub mod error;
pub mod helper;
pub mod native;
pub mod script_builder_ext;

pub use contract::{Contract, VerificationScript};
pub use contract_parameter::{ContractParameter, ContractParameterValue};
pub use contract_parameter_type::ContractParameterType;
pub use error::{ContractError, ContractResult};
pub use helper::{compress_public_key, is_multi_sig_contract, is_signature_contract};
pub use native::{Nep17Token, GAS_TOKEN_HASH, NEO_TOKEN_HASH};
pub use script_builder_ext::{assemble_contract_call, ScriptBuilderExt};
