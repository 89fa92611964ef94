//! Human-readable rendering of scripts.

use crate::instruction::{Instruction, Instructions};
use std::fmt::Write;
use tracing::debug;

/// Renders scripts as one `PPPP MNEMONIC [operand]` line per instruction.
///
/// `PPPP` is the instruction offset in upper-case hex. `SYSCALL` operands are
/// shown as the service name when the id is catalogued and as the raw id
/// otherwise. A truncated trailing instruction stops the listing; the lines
/// rendered before it are still returned.
pub struct Disassembler<'a> {
    script: &'a [u8],
}

impl<'a> Disassembler<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self { script }
    }

    pub fn instructions(&self) -> Instructions<'a> {
        Instructions::new(self.script)
    }

    /// The decoded instructions, plus the offset at which decoding stopped
    /// early, if it did.
    pub fn decode(&self) -> (Vec<Instruction<'a>>, Option<usize>) {
        let mut iter = self.instructions();
        let decoded = iter.by_ref().collect();
        (decoded, iter.truncated_at())
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut iter = self.instructions();
        for instruction in iter.by_ref() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{:04X} {}", instruction.pointer, instruction);
        }
        if let Some(position) = iter.truncated_at() {
            debug!(
                position,
                len = self.script.len(),
                "script truncated, disassembly stopped"
            );
        }
        out
    }
}

/// Renders `script` with a [`Disassembler`].
pub fn render(script: &[u8]) -> String {
    Disassembler::new(script).render()
}
