//! Process-level constants.

/// Exit codes reported by the `limb128` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, serialization).
    pub const ERROR_GENERIC: i32 = 1;
    /// An operation overflowed under `--strict`.
    pub const ERROR_OVERFLOW: i32 = 2;
    /// Invalid operand, operand count, or radix.
    pub const ERROR_INPUT: i32 = 4;
}

/// Binary name used for shell completion scripts.
pub const BIN_NAME: &str = "limb128";
