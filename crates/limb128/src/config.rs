//! Application configuration from CLI flags and environment.

use clap::Parser;

use crate::ops::Op;

/// limb128: 128-bit integer arithmetic on two 64-bit limbs.
#[derive(Parser, Debug)]
#[command(name = "limb128", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Operation to apply.
    #[arg(value_enum, required_unless_present = "completion")]
    pub op: Option<Op>,

    /// First operand.
    #[arg(allow_hyphen_values = true)]
    pub a: Option<String>,

    /// Second operand, or the bit count for `shl` and `shr`.
    #[arg(allow_hyphen_values = true)]
    pub b: Option<String>,

    /// Treat operands as signed two's-complement values.
    #[arg(short, long, env = "LIMB128_SIGNED")]
    pub signed: bool,

    /// Radix of the operands (default: detect from a 0b/0o/0d/0x prefix, else 10).
    #[arg(long)]
    pub input_radix: Option<u32>,

    /// Radix of the printed result.
    #[arg(short, long, default_value_t = 10, env = "LIMB128_RADIX")]
    pub radix: u32,

    /// Fail when the operation overflows instead of printing the wrapped value.
    #[arg(long)]
    pub strict: bool,

    /// Emit a JSON object instead of text.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only output the value).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
