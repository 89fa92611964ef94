//! Instruction catalog for the script virtual machine.
//!
//! Every instruction the encoder can emit or the disassembler can read is a
//! variant of [`OpCode`]. The byte values and operand sizes are wire
//! constants: scripts are executed verbatim by remote nodes and hashed into
//! account identifiers, so nothing here may change.
//!
//! The push region follows the legacy NeoVM layout, in which a byte value in
//! `0x01..=0x4B` is both the instruction code and the length of the data
//! that follows it.

pub mod operand_size;

pub use operand_size::OperandSize;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use std::str::FromStr;
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Represents the opcode of an instruction.
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
pub enum OpCode {
    // Constants
    /// Pushes an empty byte string, which the VM also reads as integer 0.
    PUSH0 = 0x00,
    PUSHBYTES1 = 0x01,
    PUSHBYTES2 = 0x02,
    PUSHBYTES3 = 0x03,
    PUSHBYTES4 = 0x04,
    PUSHBYTES5 = 0x05,
    PUSHBYTES6 = 0x06,
    PUSHBYTES7 = 0x07,
    PUSHBYTES8 = 0x08,
    PUSHBYTES9 = 0x09,
    PUSHBYTES10 = 0x0A,
    PUSHBYTES11 = 0x0B,
    PUSHBYTES12 = 0x0C,
    PUSHBYTES13 = 0x0D,
    PUSHBYTES14 = 0x0E,
    PUSHBYTES15 = 0x0F,
    PUSHBYTES16 = 0x10,
    PUSHBYTES17 = 0x11,
    PUSHBYTES18 = 0x12,
    PUSHBYTES19 = 0x13,
    PUSHBYTES20 = 0x14,
    PUSHBYTES21 = 0x15,
    PUSHBYTES22 = 0x16,
    PUSHBYTES23 = 0x17,
    PUSHBYTES24 = 0x18,
    PUSHBYTES25 = 0x19,
    PUSHBYTES26 = 0x1A,
    PUSHBYTES27 = 0x1B,
    PUSHBYTES28 = 0x1C,
    PUSHBYTES29 = 0x1D,
    PUSHBYTES30 = 0x1E,
    PUSHBYTES31 = 0x1F,
    PUSHBYTES32 = 0x20,
    PUSHBYTES33 = 0x21,
    PUSHBYTES34 = 0x22,
    PUSHBYTES35 = 0x23,
    PUSHBYTES36 = 0x24,
    PUSHBYTES37 = 0x25,
    PUSHBYTES38 = 0x26,
    PUSHBYTES39 = 0x27,
    PUSHBYTES40 = 0x28,
    PUSHBYTES41 = 0x29,
    PUSHBYTES42 = 0x2A,
    PUSHBYTES43 = 0x2B,
    PUSHBYTES44 = 0x2C,
    PUSHBYTES45 = 0x2D,
    PUSHBYTES46 = 0x2E,
    PUSHBYTES47 = 0x2F,
    PUSHBYTES48 = 0x30,
    PUSHBYTES49 = 0x31,
    PUSHBYTES50 = 0x32,
    PUSHBYTES51 = 0x33,
    PUSHBYTES52 = 0x34,
    PUSHBYTES53 = 0x35,
    PUSHBYTES54 = 0x36,
    PUSHBYTES55 = 0x37,
    PUSHBYTES56 = 0x38,
    PUSHBYTES57 = 0x39,
    PUSHBYTES58 = 0x3A,
    PUSHBYTES59 = 0x3B,
    PUSHBYTES60 = 0x3C,
    PUSHBYTES61 = 0x3D,
    PUSHBYTES62 = 0x3E,
    PUSHBYTES63 = 0x3F,
    PUSHBYTES64 = 0x40,
    PUSHBYTES65 = 0x41,
    PUSHBYTES66 = 0x42,
    PUSHBYTES67 = 0x43,
    PUSHBYTES68 = 0x44,
    PUSHBYTES69 = 0x45,
    PUSHBYTES70 = 0x46,
    PUSHBYTES71 = 0x47,
    PUSHBYTES72 = 0x48,
    PUSHBYTES73 = 0x49,
    PUSHBYTES74 = 0x4A,
    PUSHBYTES75 = 0x4B,
    PUSHDATA1 = 0x4C,
    PUSHDATA2 = 0x4D,
    PUSHDATA4 = 0x4E,
    PUSHM1 = 0x4F,
    PUSH1 = 0x51,
    PUSH2 = 0x52,
    PUSH3 = 0x53,
    PUSH4 = 0x54,
    PUSH5 = 0x55,
    PUSH6 = 0x56,
    PUSH7 = 0x57,
    PUSH8 = 0x58,
    PUSH9 = 0x59,
    PUSH10 = 0x5A,
    PUSH11 = 0x5B,
    PUSH12 = 0x5C,
    PUSH13 = 0x5D,
    PUSH14 = 0x5E,
    PUSH15 = 0x5F,
    PUSH16 = 0x60,

    // Flow control
    NOP = 0x61,
    JMP = 0x62,
    JMPIF = 0x63,
    JMPIFNOT = 0x64,
    CALL = 0x65,
    RET = 0x66,
    APPCALL = 0x67,
    SYSCALL = 0x68,
    TAILCALL = 0x69,

    // Stack
    DUPFROMALTSTACK = 0x6A,
    TOALTSTACK = 0x6B,
    FROMALTSTACK = 0x6C,
    XDROP = 0x6D,

    // Fixed-width signed integers
    PUSHINT8 = 0x6E,
    PUSHINT16 = 0x6F,
    PUSHINT32 = 0x70,
    PUSHINT64 = 0x71,

    XSWAP = 0x72,
    XTUCK = 0x73,
    DEPTH = 0x74,
    DROP = 0x75,
    DUP = 0x76,
    NIP = 0x77,
    OVER = 0x78,
    PICK = 0x79,
    ROLL = 0x7A,
    ROT = 0x7B,
    SWAP = 0x7C,
    TUCK = 0x7D,

    // Splice
    CAT = 0x7E,
    SUBSTR = 0x7F,
    LEFT = 0x80,
    RIGHT = 0x81,
    SIZE = 0x82,

    // Bitwise logic
    INVERT = 0x83,
    AND = 0x84,
    OR = 0x85,
    XOR = 0x86,
    EQUAL = 0x87,

    // Arithmetic
    INC = 0x8B,
    DEC = 0x8C,
    SIGN = 0x8D,
    NEGATE = 0x8F,
    ABS = 0x90,
    NOT = 0x91,
    NZ = 0x92,
    ADD = 0x93,
    SUB = 0x94,
    MUL = 0x95,
    DIV = 0x96,
    MOD = 0x97,
    SHL = 0x98,
    SHR = 0x99,
    BOOLAND = 0x9A,
    BOOLOR = 0x9B,
    NUMEQUAL = 0x9C,
    NUMNOTEQUAL = 0x9E,
    LT = 0x9F,
    GT = 0xA0,
    LTE = 0xA1,
    GTE = 0xA2,
    MIN = 0xA3,
    MAX = 0xA4,
    WITHIN = 0xA5,

    // Crypto
    SHA1 = 0xA7,
    SHA256 = 0xA8,
    HASH160 = 0xA9,
    HASH256 = 0xAA,
    CHECKSIG = 0xAC,
    VERIFY = 0xAD,
    CHECKMULTISIG = 0xAE,

    // Compound types
    ARRAYSIZE = 0xC0,
    PACK = 0xC1,
    UNPACK = 0xC2,
    PICKITEM = 0xC3,
    SETITEM = 0xC4,
    NEWARRAY = 0xC5,
    NEWSTRUCT = 0xC6,
    NEWMAP = 0xC7,
    APPEND = 0xC8,
    REVERSE = 0xC9,
    REMOVE = 0xCA,
    HASKEY = 0xCB,
    KEYS = 0xCC,
    VALUES = 0xCD,
    /// Pops a count, then that many key/value pairs, and pushes a map.
    PACKMAP = 0xCE,

    // Stack isolation
    CALL_I = 0xE0,
    CALL_E = 0xE1,
    CALL_ED = 0xE2,
    CALL_ET = 0xE3,
    CALL_EDT = 0xE4,

    // Exceptions
    THROW = 0xF0,
    THROWIFNOT = 0xF1,
}

/// Catalog entry for one instruction code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstructionDescriptor {
    pub mnemonic: &'static str,
    pub code: u8,
    pub operand_size: OperandSize,
}

impl InstructionDescriptor {
    /// Mnemonic reported for bytes that are not in the catalog.
    pub const UNKNOWN_MNEMONIC: &'static str = "UNKNOWN";

    /// Sentinel for an unassigned code. It carries no operand so a scan can
    /// step over it one byte at a time.
    pub const fn unknown(code: u8) -> Self {
        Self {
            mnemonic: Self::UNKNOWN_MNEMONIC,
            code,
            operand_size: OperandSize::NONE,
        }
    }

    pub fn is_unknown(&self) -> bool {
        OpCode::try_from(self.code).is_err()
    }

    /// The catalogued opcode, `None` for the unknown sentinel.
    pub fn opcode(&self) -> Option<OpCode> {
        OpCode::try_from(self.code).ok()
    }
}

impl OpCode {
    /// Alias of [`OpCode::PUSH0`].
    pub const PUSHF: OpCode = OpCode::PUSH0;
    /// Alias of [`OpCode::PUSH1`].
    pub const PUSHT: OpCode = OpCode::PUSH1;

    /// Gets the operand size of this opcode.
    pub const fn operand_size(self) -> OperandSize {
        use OpCode::*;
        match self {
            PUSHDATA1 => OperandSize::prefix(1),
            PUSHDATA2 => OperandSize::prefix(2),
            PUSHDATA4 => OperandSize::prefix(4),
            PUSHINT8 => OperandSize::fixed(1),
            PUSHINT16 => OperandSize::fixed(2),
            PUSHINT32 => OperandSize::fixed(4),
            PUSHINT64 => OperandSize::fixed(8),
            JMP | JMPIF | JMPIFNOT | CALL | CALL_ED | CALL_EDT => OperandSize::fixed(2),
            SYSCALL | CALL_I => OperandSize::fixed(4),
            APPCALL | TAILCALL => OperandSize::fixed(20),
            CALL_E | CALL_ET => OperandSize::fixed(22),
            _ => {
                let code = self as u8;
                if code >= 0x01 && code <= 0x4B {
                    OperandSize::fixed(code as usize)
                } else {
                    OperandSize::NONE
                }
            }
        }
    }

    /// The canonical mnemonic.
    pub fn mnemonic(self) -> &'static str {
        self.into()
    }

    /// The catalog entry of this opcode.
    pub fn descriptor(self) -> InstructionDescriptor {
        InstructionDescriptor {
            mnemonic: self.mnemonic(),
            code: self as u8,
            operand_size: self.operand_size(),
        }
    }

    /// Looks up a code. Unassigned codes yield the `UNKNOWN` sentinel.
    pub fn lookup_by_code(code: u8) -> InstructionDescriptor {
        match OpCode::try_from(code) {
            Ok(op) => op.descriptor(),
            Err(_) => InstructionDescriptor::unknown(code),
        }
    }

    /// Looks up a mnemonic, including the `PUSHF`/`PUSHT` aliases.
    pub fn lookup_by_mnemonic(name: &str) -> Option<InstructionDescriptor> {
        let op = match name {
            "PUSHF" => OpCode::PUSHF,
            "PUSHT" => OpCode::PUSHT,
            _ => OpCode::from_str(name).ok()?,
        };
        Some(op.descriptor())
    }

    /// The dedicated single-byte instruction for `-1..=16`, if any.
    pub fn push_small(value: i64) -> Option<OpCode> {
        match value {
            -1 => Some(OpCode::PUSHM1),
            0 => Some(OpCode::PUSH0),
            1..=16 => OpCode::try_from(OpCode::PUSH1 as u8 + (value as u8 - 1)).ok(),
            _ => None,
        }
    }

    /// The value pushed by `PUSHM1`, `PUSH0` and `PUSH1..=PUSH16`.
    pub fn small_value(self) -> Option<i64> {
        let code = self as u8;
        match self {
            OpCode::PUSHM1 => Some(-1),
            OpCode::PUSH0 => Some(0),
            _ if (OpCode::PUSH1 as u8..=OpCode::PUSH16 as u8).contains(&code) => {
                Some(i64::from(code - OpCode::PUSH1 as u8) + 1)
            }
            _ => None,
        }
    }

    /// The direct-push instruction whose code equals `len`, for `1..=75`.
    pub fn push_bytes(len: usize) -> Option<OpCode> {
        if (1..=0x4B).contains(&len) {
            OpCode::try_from(len as u8).ok()
        } else {
            None
        }
    }

    /// Whether the instruction carries a byte string (`PUSH0`, `PUSHBYTESn`, `PUSHDATAn`).
    pub fn is_data_push(self) -> bool {
        (self as u8) <= OpCode::PUSHDATA4 as u8
    }

    /// Whether the operand is a relative 16-bit jump offset.
    pub fn is_jump(self) -> bool {
        matches!(
            self,
            OpCode::JMP | OpCode::JMPIF | OpCode::JMPIFNOT | OpCode::CALL
        )
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl fmt::Display for InstructionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_push_region_codes() {
        assert_eq!(OpCode::PUSH0 as u8, 0x00);
        assert_eq!(OpCode::PUSHBYTES1 as u8, 0x01);
        assert_eq!(OpCode::PUSHBYTES75 as u8, 0x4B);
        assert_eq!(OpCode::PUSHDATA1 as u8, 0x4C);
        assert_eq!(OpCode::PUSHDATA2 as u8, 0x4D);
        assert_eq!(OpCode::PUSHDATA4 as u8, 0x4E);
        assert_eq!(OpCode::PUSHM1 as u8, 0x4F);
        assert_eq!(OpCode::PUSH1 as u8, 0x51);
        assert_eq!(OpCode::PUSH16 as u8, 0x60);
        assert_eq!(OpCode::SYSCALL as u8, 0x68);
    }

    #[test]
    fn test_pushbytes_operand_equals_code() {
        for len in 1..=75usize {
            let op = OpCode::push_bytes(len).unwrap();
            assert_eq!(op as u8 as usize, len);
            assert_eq!(op.operand_size(), OperandSize::fixed(len));
        }
        assert_eq!(OpCode::push_bytes(0), None);
        assert_eq!(OpCode::push_bytes(76), None);
    }

    #[test]
    fn test_small_values_round_trip() {
        for value in -1..=16 {
            let op = OpCode::push_small(value).unwrap();
            assert_eq!(op.small_value(), Some(value));
        }
        assert_eq!(OpCode::push_small(17), None);
        assert_eq!(OpCode::push_small(-2), None);
        assert_eq!(OpCode::ADD.small_value(), None);
    }

    #[test]
    fn test_lookup_unknown_code() {
        let descriptor = OpCode::lookup_by_code(0x50);
        assert_eq!(descriptor.mnemonic, "UNKNOWN");
        assert_eq!(descriptor.operand_size, OperandSize::NONE);
        assert!(descriptor.is_unknown());
        assert_eq!(descriptor.opcode(), None);
    }

    #[test]
    fn test_every_opcode_resolves_both_ways() {
        for op in OpCode::iter() {
            let by_code = OpCode::lookup_by_code(op as u8);
            assert_eq!(by_code.opcode(), Some(op));
            assert_eq!(OpCode::lookup_by_mnemonic(op.mnemonic()), Some(by_code));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            OpCode::lookup_by_mnemonic("PUSHF").unwrap().code,
            OpCode::PUSH0 as u8
        );
        assert_eq!(
            OpCode::lookup_by_mnemonic("PUSHT").unwrap().code,
            OpCode::PUSH1 as u8
        );
        assert_eq!(OpCode::lookup_by_mnemonic("push1"), None);
        assert_eq!(OpCode::lookup_by_mnemonic("PUSHINT128"), None);
    }

    #[test]
    fn test_fixed_operand_sizes() {
        assert_eq!(OpCode::PUSHINT8.operand_size().size(), 1);
        assert_eq!(OpCode::PUSHINT64.operand_size().size(), 8);
        assert_eq!(OpCode::SYSCALL.operand_size().size(), 4);
        assert_eq!(OpCode::APPCALL.operand_size().size(), 20);
        assert_eq!(OpCode::CALL_E.operand_size().size(), 22);
        assert_eq!(OpCode::JMP.operand_size().size(), 2);
        assert_eq!(OpCode::PUSHDATA2.operand_size().size_prefix(), 2);
        assert_eq!(OpCode::RET.operand_size(), OperandSize::NONE);
        assert_eq!(OpCode::PUSH0.operand_size(), OperandSize::NONE);
    }
}
