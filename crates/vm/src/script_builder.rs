//! Script builder module.
//!
//! This module provides a way to programmatically construct scripts. Every
//! write reserves its full size up front, so a failing call never leaves a
//! partial instruction in the buffer.

use crate::error::{VmError, VmResult};
use crate::interop_service::InteropService;
use crate::op_code::OpCode;
use crate::script::Script;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::{debug, trace};

/// Helps construct VM scripts programmatically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptBuilder {
    /// The script being built
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Creates a builder whose buffer can hold `capacity` bytes without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> VmResult<Self> {
        let mut builder = Self::new();
        builder.reserve(capacity)?;
        Ok(builder)
    }

    fn reserve(&mut self, additional: usize) -> VmResult<()> {
        self.script
            .try_reserve(additional)
            .map_err(|_| VmError::AllocationFailure {
                requested: additional,
            })
    }

    /// Appends `parts` as one write.
    fn write(&mut self, parts: &[&[u8]]) -> VmResult<&mut Self> {
        let total = parts.iter().map(|part| part.len()).sum();
        self.reserve(total)?;
        for part in parts {
            self.script.extend_from_slice(part);
        }
        Ok(self)
    }

    /// Emits a single byte to the script.
    pub fn emit(&mut self, byte: u8) -> VmResult<&mut Self> {
        self.write(&[&[byte]])
    }

    /// Emits an opcode to the script.
    pub fn emit_opcode(&mut self, op: OpCode) -> VmResult<&mut Self> {
        self.emit(op as u8)
    }

    /// Emits an opcode and its operand, checked against the catalogued
    /// operand size. Length-prefixed opcodes take the bare data; the prefix
    /// is written here.
    pub fn emit_instruction(&mut self, op: OpCode, operand: &[u8]) -> VmResult<&mut Self> {
        let operand_size = op.operand_size();
        if operand_size.has_size_prefix() {
            let width = operand_size.size_prefix();
            let len = operand.len() as u64;
            if width < 8 && len >> (width * 8) != 0 {
                return Err(VmError::invalid_argument(format!(
                    "{op} cannot carry {len} bytes"
                )));
            }
            let prefix = len.to_le_bytes();
            return self.write(&[&[op as u8], &prefix[..width], operand]);
        }
        if operand.len() != operand_size.size() {
            return Err(VmError::invalid_argument(format!(
                "{op} expects {} operand bytes, got {}",
                operand_size.size(),
                operand.len()
            )));
        }
        self.write(&[&[op as u8], operand])
    }

    /// Emits raw bytes to the script.
    pub fn emit_raw(&mut self, bytes: &[u8]) -> VmResult<&mut Self> {
        self.write(&[bytes])
    }

    /// Emits the canonical push of an integer.
    ///
    /// `-1..=16` use their single-byte instruction; anything else uses the
    /// narrowest of `PUSHINT8/16/32/64` that holds it.
    pub fn emit_push_int(&mut self, value: i64) -> VmResult<&mut Self> {
        if let Some(op) = OpCode::push_small(value) {
            return self.emit_opcode(op);
        }
        if let Ok(v) = i8::try_from(value) {
            self.emit_instruction(OpCode::PUSHINT8, &v.to_le_bytes())
        } else if let Ok(v) = i16::try_from(value) {
            self.emit_instruction(OpCode::PUSHINT16, &v.to_le_bytes())
        } else if let Ok(v) = i32::try_from(value) {
            self.emit_instruction(OpCode::PUSHINT32, &v.to_le_bytes())
        } else {
            self.emit_instruction(OpCode::PUSHINT64, &value.to_le_bytes())
        }
    }

    /// Emits a push of an arbitrary-precision integer.
    ///
    /// Values outside `i64` are pushed as their minimal little-endian
    /// two's-complement bytes.
    pub fn emit_push_bigint(&mut self, value: &BigInt) -> VmResult<&mut Self> {
        match value.to_i64() {
            Some(v) => self.emit_push_int(v),
            None => self.emit_push(&value.to_signed_bytes_le()),
        }
    }

    /// Emits a push operation for a boolean.
    pub fn emit_push_bool(&mut self, value: bool) -> VmResult<&mut Self> {
        self.emit_push_int(i64::from(value))
    }

    /// Emits a push operation with the given data.
    pub fn emit_push(&mut self, data: &[u8]) -> VmResult<&mut Self> {
        let len = data.len();
        if len == 0 {
            return self.emit_opcode(OpCode::PUSH0);
        }
        if let Some(op) = OpCode::push_bytes(len) {
            return self.write(&[&[op as u8], data]);
        }
        let op = if len <= 0xFF {
            OpCode::PUSHDATA1
        } else if len <= 0xFFFF {
            OpCode::PUSHDATA2
        } else if u32::try_from(len).is_ok() {
            OpCode::PUSHDATA4
        } else {
            return Err(VmError::invalid_argument(format!(
                "{len} bytes exceed the largest push"
            )));
        };
        self.emit_instruction(op, data)
    }

    /// Emits a push operation for a string.
    pub fn emit_push_string(&mut self, value: &str) -> VmResult<&mut Self> {
        self.emit_push(value.as_bytes())
    }

    /// Emits a syscall for a named service.
    pub fn emit_syscall(&mut self, api: &str) -> VmResult<&mut Self> {
        if api.is_empty() {
            return Err(VmError::invalid_argument("syscall name is empty"));
        }
        let id = match InteropService::find_by_name(api) {
            Some(id) => id,
            None => {
                debug!(api, "syscall to uncatalogued service");
                InteropService::hash_of(api)
            }
        };
        self.emit_syscall_hash(id)
    }

    /// Emits a syscall for a precomputed service id.
    pub fn emit_syscall_hash(&mut self, id: u32) -> VmResult<&mut Self> {
        self.emit_instruction(OpCode::SYSCALL, &id.to_le_bytes())
    }

    /// Emits a jump operation.
    pub fn emit_jump(&mut self, op: OpCode, offset: i16) -> VmResult<&mut Self> {
        if !op.is_jump() {
            return Err(VmError::invalid_argument(format!(
                "{op} is not a jump operation"
            )));
        }
        self.emit_instruction(op, &offset.to_le_bytes())
    }

    /// Emits a call operation.
    pub fn emit_call(&mut self, offset: i16) -> VmResult<&mut Self> {
        self.emit_jump(OpCode::CALL, offset)
    }

    /// Emits an append operation.
    pub fn emit_append(&mut self) -> VmResult<&mut Self> {
        self.emit_opcode(OpCode::APPEND)
    }

    /// Emits a pack operation.
    pub fn emit_pack(&mut self) -> VmResult<&mut Self> {
        self.emit_opcode(OpCode::PACK)
    }

    /// Emits a map pack operation.
    pub fn emit_pack_map(&mut self) -> VmResult<&mut Self> {
        self.emit_opcode(OpCode::PACKMAP)
    }

    /// Runs `f` against this builder and rolls the buffer back to its
    /// current length if `f` fails.
    pub fn atomic<T, E>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E> {
        let mark = self.script.len();
        let result = f(self);
        if result.is_err() {
            trace!(
                discarded = self.script.len() - mark,
                "rolling back failed script write"
            );
            self.script.truncate(mark);
        }
        result
    }

    /// Converts the builder to a script.
    ///
    /// The builder is left untouched; calling this again without writes in
    /// between yields an equal script.
    pub fn to_script(&self) -> Script {
        trace!(len = self.script.len(), "script finalized");
        Script::from(self.script.clone())
    }

    /// Converts the builder to a byte array.
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.script
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Clears the buffer, keeping its allocation.
    pub fn reset(&mut self) {
        self.script.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_opcode() -> VmResult<()> {
        let mut builder = ScriptBuilder::new();
        builder
            .emit_opcode(OpCode::PUSH1)?
            .emit_opcode(OpCode::PUSH2)?
            .emit_opcode(OpCode::ADD)?;

        assert_eq!(builder.to_array(), vec![0x51, 0x52, 0x93]);
        Ok(())
    }

    #[test]
    fn test_emit_push_int_small() -> VmResult<()> {
        let mut builder = ScriptBuilder::new();
        builder
            .emit_push_int(-1)?
            .emit_push_int(0)?
            .emit_push_int(10)?
            .emit_push_int(16)?;

        assert_eq!(builder.to_array(), vec![0x4F, 0x00, 0x5A, 0x60]);
        Ok(())
    }

    #[test]
    fn test_emit_push_int_widths() -> VmResult<()> {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(17)?;
        assert_eq!(builder.to_array(), vec![0x6E, 0x11]);

        builder.reset();
        builder.emit_push_int(-2)?;
        assert_eq!(builder.to_array(), vec![0x6E, 0xFE]);

        builder.reset();
        builder.emit_push_int(128)?;
        assert_eq!(builder.to_array(), vec![0x6F, 0x80, 0x00]);

        builder.reset();
        builder.emit_push_int(-32769)?;
        assert_eq!(builder.to_array(), vec![0x70, 0xFF, 0x7F, 0xFF, 0xFF]);

        builder.reset();
        builder.emit_push_int(i64::MIN)?;
        assert_eq!(builder.to_array(), vec![0x71, 0, 0, 0, 0, 0, 0, 0, 0x80]);
        Ok(())
    }

    #[test]
    fn test_emit_push_bigint() -> VmResult<()> {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_bigint(&BigInt::from(5))?;
        assert_eq!(builder.to_array(), vec![0x55]);

        builder.reset();
        let wide = BigInt::from(u64::MAX);
        builder.emit_push_bigint(&wide)?;
        let mut expected = vec![0x09];
        expected.extend_from_slice(&[0xFF; 8]);
        expected.push(0x00);
        assert_eq!(builder.to_array(), expected);
        Ok(())
    }

    #[test]
    fn test_emit_push_bool() -> VmResult<()> {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_bool(true)?.emit_push_bool(false)?;
        assert_eq!(builder.to_array(), vec![0x51, 0x00]);
        Ok(())
    }

    #[test]
    fn test_emit_push_tiers() -> VmResult<()> {
        let mut builder = ScriptBuilder::new();
        builder.emit_push(&[])?;
        assert_eq!(builder.to_array(), vec![0x00]);

        builder.reset();
        builder.emit_push(&[1, 2, 3])?;
        assert_eq!(builder.to_array(), vec![0x03, 1, 2, 3]);

        builder.reset();
        builder.emit_push(&[0; 75])?;
        assert_eq!(builder.as_bytes()[0], 75);
        assert_eq!(builder.len(), 76);

        builder.reset();
        builder.emit_push(&[0; 76])?;
        assert_eq!(&builder.as_bytes()[..2], &[0x4C, 76]);

        builder.reset();
        builder.emit_push(&[0; 256])?;
        assert_eq!(&builder.as_bytes()[..3], &[0x4D, 0x00, 0x01]);

        builder.reset();
        builder.emit_push(&vec![0; 65536])?;
        assert_eq!(&builder.as_bytes()[..5], &[0x4E, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(builder.len(), 65541);
        Ok(())
    }

    #[test]
    fn test_emit_jump() -> VmResult<()> {
        let mut builder = ScriptBuilder::new();
        builder.emit_jump(OpCode::JMP, 10)?.emit_call(-3)?;
        assert_eq!(builder.to_array(), vec![0x62, 10, 0, 0x65, 0xFD, 0xFF]);

        let err = builder.emit_jump(OpCode::ADD, 1).unwrap_err();
        assert!(matches!(err, VmError::InvalidArgument(_)));
        assert_eq!(builder.len(), 6);
        Ok(())
    }

    #[test]
    fn test_emit_syscall() -> VmResult<()> {
        let mut builder = ScriptBuilder::new();
        builder.emit_syscall("System.Runtime.Log")?;

        let script = builder.to_array();
        let id = InteropService::hash_of("System.Runtime.Log");
        assert_eq!(script[0], OpCode::SYSCALL as u8);
        assert_eq!(&script[1..], &id.to_le_bytes());
        Ok(())
    }

    #[test]
    fn test_emit_syscall_empty_name() {
        let mut builder = ScriptBuilder::new();
        assert!(matches!(
            builder.emit_syscall(""),
            Err(VmError::InvalidArgument(_))
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_emit_instruction_checks_operand() {
        let mut builder = ScriptBuilder::new();
        assert!(builder.emit_instruction(OpCode::SYSCALL, &[1, 2]).is_err());
        assert!(builder.emit_instruction(OpCode::RET, &[1]).is_err());
        assert!(builder.emit_instruction(OpCode::PUSHDATA1, &[0; 256]).is_err());
        assert!(builder.is_empty());
    }

    #[test]
    fn test_atomic_rolls_back() -> VmResult<()> {
        let mut builder = ScriptBuilder::new();
        builder.emit_opcode(OpCode::NOP)?;
        let result = builder.atomic(|b| {
            b.emit_push_int(100)?;
            b.emit_jump(OpCode::RET, 0)?;
            Ok::<_, VmError>(())
        });
        assert!(result.is_err());
        assert_eq!(builder.to_array(), vec![0x61]);
        Ok(())
    }

    #[test]
    fn test_to_script_is_idempotent() -> VmResult<()> {
        let mut builder = ScriptBuilder::new();
        builder.emit_opcode(OpCode::PUSH1)?.emit_opcode(OpCode::RET)?;

        let first = builder.to_script();
        let second = builder.to_script();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        Ok(())
    }
}
