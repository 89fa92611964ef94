//! Operand size information for opcodes.

/// Represents the operand size information for an opcode.
///
/// An operand is either absent, a fixed number of bytes, or a length prefix
/// of `size_prefix` little-endian bytes followed by that many data bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OperandSize {
    /// The size of the operand, if fixed
    size: usize,

    /// The size prefix of the operand, if variable
    size_prefix: usize,
}

impl OperandSize {
    /// No operand.
    pub const NONE: Self = Self {
        size: 0,
        size_prefix: 0,
    };

    /// Creates a new operand size with a fixed size.
    pub const fn fixed(size: usize) -> Self {
        Self {
            size,
            size_prefix: 0,
        }
    }

    /// Creates a new operand size whose length is read from a prefix of
    /// `size_prefix` bytes.
    pub const fn prefix(size_prefix: usize) -> Self {
        Self {
            size: 0,
            size_prefix,
        }
    }

    /// Gets the fixed size of the operand.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Gets the size prefix of the operand.
    pub const fn size_prefix(&self) -> usize {
        self.size_prefix
    }

    /// Checks if the operand has a fixed size.
    pub const fn has_fixed_size(&self) -> bool {
        self.size > 0
    }

    /// Checks if the operand has a size prefix.
    pub const fn has_size_prefix(&self) -> bool {
        self.size_prefix > 0
    }
}
