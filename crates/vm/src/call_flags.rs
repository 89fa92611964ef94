//! Call flags restricting what an invoked contract may do.

use bitflags::bitflags;

bitflags! {
    /// Flags that control what operations a contract can perform.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CallFlags: u8 {
        /// No flags.
        const NONE = 0;
        /// Allow reading states.
        const READ_STATES = 0x01;
        /// Allow writing states.
        const WRITE_STATES = 0x02;
        /// Allow calling other contracts.
        const ALLOW_CALL = 0x04;
        /// Allow sending notifications.
        const ALLOW_NOTIFY = 0x08;
        /// Allow reading and writing states.
        const STATES = Self::READ_STATES.bits() | Self::WRITE_STATES.bits();
        /// Allow reading states and calling other contracts.
        const READ_ONLY = Self::READ_STATES.bits() | Self::ALLOW_CALL.bits();
        /// Allow all operations.
        const ALL = Self::STATES.bits() | Self::ALLOW_CALL.bits() | Self::ALLOW_NOTIFY.bits();
    }
}

impl CallFlags {
    /// Checks if the flags include the specified flags.
    pub fn has_flag(&self, flag: Self) -> bool {
        self.contains(flag)
    }
}
