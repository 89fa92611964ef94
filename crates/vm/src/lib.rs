//! # Neo SDK VM
//!
//! Script-level building blocks for Neo smart contract invocations.
//!
//! ## Components
//!
//! - **OpCode**: the instruction catalog, with operand sizes and mnemonic lookup
//! - **InteropService**: the syscall catalog mapping service names to ids
//! - **ScriptBuilder**: the append-only script encoder
//! - **Script**: a finalized, shareable script
//! - **Instruction** / **Disassembler**: decoding and mnemonic rendering
//!
//! ## Example
//!
//! ```rust
//! use neo_sdk_vm::{OpCode, ScriptBuilder};
//!
//! # fn main() -> Result<(), neo_sdk_vm::VmError> {
//! let mut builder = ScriptBuilder::new();
//! builder
//!     .emit_push_int(1)?
//!     .emit_push_int(2)?
//!     .emit_opcode(OpCode::ADD)?;
//!
//! let script = builder.to_script();
//! assert_eq!(script.disassemble(), "0000 PUSH1\n0001 PUSH2\n0002 ADD\n");
//! # Ok(())
//! # }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

/// Call permission flags for interop services
pub mod call_flags;
/// Mnemonic rendering of scripts
pub mod disassembler;
/// VM error types and result handling
pub mod error;
/// VM instruction representation
pub mod instruction;
/// Interop service catalog
pub mod interop_service;
/// VM opcode definitions and utilities
pub mod op_code;
/// VM script representation
pub mod script;
/// Utility for constructing VM bytecode
pub mod script_builder;

pub use call_flags::CallFlags;
pub use disassembler::Disassembler;
pub use error::{VmError, VmResult};
pub use instruction::{Instruction, Instructions};
pub use interop_service::{InteropDescriptor, InteropService};
pub use op_code::{InstructionDescriptor, OpCode, OperandSize};
pub use script::Script;
pub use script_builder::ScriptBuilder;
