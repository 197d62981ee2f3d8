//! Error handling and exit codes.

use limb128_core::IntError;
use thiserror::Error;

use crate::constants::exit_codes;

/// Failures the CLI distinguishes when choosing an exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// No operation was given on the command line.
    #[error("no operation given")]
    NoOperation,

    /// An operand the operation needs is absent.
    #[error("`{op}` needs operand `{name}`")]
    MissingOperand { op: &'static str, name: &'static str },

    /// An operand was given to an operation that takes none there.
    #[error("`{op}` does not take operand `{name}`")]
    UnexpectedOperand { op: &'static str, name: &'static str },

    /// An operand did not parse.
    #[error("invalid operand `{name}` ({text:?})")]
    InvalidOperand {
        name: &'static str,
        text: String,
        #[source]
        source: IntError,
    },

    /// A shift amount beyond `u32`.
    #[error("shift amount {0:?} does not fit in 32 bits")]
    ShiftAmount(String),

    /// `--radix` or `--input-radix` out of range.
    #[error("invalid configuration")]
    Config(#[source] IntError),

    /// The result overflowed and `--strict` was given.
    #[error("`{op}` overflowed")]
    Overflow { op: &'static str },
}

/// Map an application error onto a process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Overflow { .. }) => exit_codes::ERROR_OVERFLOW,
        Some(_) => exit_codes::ERROR_INPUT,
        None => exit_codes::ERROR_GENERIC,
    }
}
