//! Instruction decoding.
//!
//! Decoding never fails outright: an operand that runs past the end of the
//! script ends the scan and is reported through [`Instructions::truncated_at`].

use crate::interop_service::InteropService;
use crate::op_code::{InstructionDescriptor, OpCode};
use std::fmt;

/// A single decoded instruction borrowing its operand from the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction<'a> {
    /// The position of the instruction in the script
    pub pointer: usize,

    /// Catalog entry of the instruction code
    pub descriptor: InstructionDescriptor,

    /// The operand data, without any length prefix
    pub operand: &'a [u8],

    size: usize,
}

impl<'a> Instruction<'a> {
    /// Decodes the instruction at `position`.
    ///
    /// Returns `None` when `position` is past the end or the operand is
    /// truncated.
    pub fn parse(script: &'a [u8], position: usize) -> Option<Self> {
        let code = *script.get(position)?;
        let descriptor = OpCode::lookup_by_code(code);
        let operand_size = descriptor.operand_size;
        let mut cursor = position + 1;

        let length = if operand_size.has_size_prefix() {
            let prefix_width = operand_size.size_prefix();
            let prefix = script.get(cursor..cursor.checked_add(prefix_width)?)?;
            cursor += prefix_width;
            let mut buf = [0u8; 4];
            buf[..prefix_width].copy_from_slice(prefix);
            usize::try_from(u32::from_le_bytes(buf)).ok()?
        } else {
            operand_size.size()
        };

        let end = cursor.checked_add(length)?;
        let operand = script.get(cursor..end)?;

        Some(Self {
            pointer: position,
            descriptor,
            operand,
            size: end - position,
        })
    }

    /// The opcode, `None` for an unassigned code.
    pub fn opcode(&self) -> Option<OpCode> {
        self.descriptor.opcode()
    }

    pub fn mnemonic(&self) -> &'static str {
        self.descriptor.mnemonic
    }

    /// Total encoded size including the code byte and any length prefix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Position of the next instruction.
    pub fn next_pointer(&self) -> usize {
        self.pointer + self.size
    }

    /// The 4-byte little-endian id of a `SYSCALL`.
    pub fn token_u32(&self) -> Option<u32> {
        let bytes: [u8; 4] = self.operand.try_into().ok()?;
        Some(u32::from_le_bytes(bytes))
    }

    /// The operand read as a little-endian signed integer of 1, 2, 4 or 8 bytes.
    pub fn token_i64(&self) -> Option<i64> {
        let value = match self.operand.len() {
            1 => i64::from(self.operand[0] as i8),
            2 => i64::from(i16::from_le_bytes(self.operand.try_into().ok()?)),
            4 => i64::from(i32::from_le_bytes(self.operand.try_into().ok()?)),
            8 => i64::from_le_bytes(self.operand.try_into().ok()?),
            _ => return None,
        };
        Some(value)
    }

    /// The relative offset of a jump or call.
    pub fn jump_offset(&self) -> Option<i16> {
        if !self.opcode()?.is_jump() {
            return None;
        }
        Some(i16::from_le_bytes(self.operand.try_into().ok()?))
    }

    /// The bytes pushed by `PUSH0`, `PUSHBYTESn` and `PUSHDATAn`.
    pub fn push_data(&self) -> Option<&'a [u8]> {
        if self.opcode()?.is_data_push() {
            Some(self.operand)
        } else {
            None
        }
    }

    /// The integer pushed by `PUSHM1`, `PUSHn` and `PUSHINTn`.
    pub fn push_integer(&self) -> Option<i64> {
        let op = self.opcode()?;
        match op {
            OpCode::PUSHINT8 | OpCode::PUSHINT16 | OpCode::PUSHINT32 | OpCode::PUSHINT64 => {
                self.token_i64()
            }
            OpCode::PUSH0 => Some(0),
            _ => op.small_value(),
        }
    }

    /// Name of the invoked service, if this is a `SYSCALL` to a catalogued id.
    pub fn syscall_name(&self) -> Option<&'static str> {
        if self.opcode()? != OpCode::SYSCALL {
            return None;
        }
        InteropService::find_by_id(self.token_u32()?).map(|d| d.name)
    }
}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())?;
        let Some(op) = self.opcode() else {
            return write!(f, " 0x{:02x}", self.descriptor.code);
        };
        match op {
            OpCode::SYSCALL => match (self.syscall_name(), self.token_u32()) {
                (Some(name), _) => write!(f, " {name}"),
                (None, Some(id)) => write!(f, " 0x{id:08x}"),
                (None, None) => Ok(()),
            },
            OpCode::PUSHINT8 | OpCode::PUSHINT16 | OpCode::PUSHINT32 | OpCode::PUSHINT64 => {
                match self.token_i64() {
                    Some(value) => write!(f, " {value}"),
                    None => Ok(()),
                }
            }
            _ if op.is_jump() => match self.jump_offset() {
                Some(offset) => write!(f, " {offset}"),
                None => Ok(()),
            },
            _ if self.operand.is_empty() => Ok(()),
            _ => write!(f, " 0x{}", hex::encode(self.operand)),
        }
    }
}

/// Iterator over the instructions of a script.
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    script: &'a [u8],
    position: usize,
    truncated_at: Option<usize>,
}

impl<'a> Instructions<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            script,
            position: 0,
            truncated_at: None,
        }
    }

    /// Position of the instruction whose operand ran past the end, once the
    /// scan has stopped on it.
    pub fn truncated_at(&self) -> Option<usize> {
        self.truncated_at
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated_at.is_some()
    }
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Instruction<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.script.len() || self.truncated_at.is_some() {
            return None;
        }
        match Instruction::parse(self.script, self.position) {
            Some(instruction) => {
                self.position = instruction.next_pointer();
                Some(instruction)
            }
            None => {
                self.truncated_at = Some(self.position);
                None
            }
        }
    }
}
