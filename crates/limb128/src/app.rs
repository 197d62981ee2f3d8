//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use tracing::{debug, warn};

use limb128_core::{I128, IntError, Parsed, U128};

use crate::config::AppConfig;
use crate::constants::BIN_NAME;
use crate::errors::CliError;
use crate::ops::{apply_signed, apply_unsigned, Arity, Op, Outcome, Rhs};
use crate::output::{self, ordering_name, Report};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
        return Ok(());
    }

    let op = config.op.ok_or(CliError::NoOperation)?;
    let report = evaluate(config, op)?;
    let text = output::render(&report, config.json, config.quiet)?;
    writeln!(io::stdout().lock(), "{text}")?;
    Ok(())
}

/// Parse the operands, apply `op` and build the report.
///
/// # Errors
///
/// Returns a [`CliError`] for bad radices, operands or operand counts, and
/// for overflow under `--strict`.
pub fn evaluate(config: &AppConfig, op: Op) -> Result<Report, CliError> {
    IntError::check_radix(config.radix).map_err(CliError::Config)?;
    if let Some(radix) = config.input_radix {
        IntError::check_radix(radix).map_err(CliError::Config)?;
    }

    let a = config.a.as_deref().ok_or(CliError::MissingOperand {
        op: op.name(),
        name: "a",
    })?;

    let mut consumed = None;
    let outcome = if config.signed {
        let lhs = if op == Op::Parse && !config.strict {
            let parsed = lenient(I128::parse_partial(a, config.input_radix), a)?;
            consumed = Some(parsed.consumed);
            parsed
        } else {
            exact(a, config.input_radix)?
        };
        let rhs = operand(op, config, |text| {
            parse_operand("b", text, |t| parse_signed(t, config.input_radix))
        })?;
        apply_signed(op, lhs.value, rhs).map(|o| (o, lhs.overflowed))
    } else {
        let lhs = if op == Op::Parse && !config.strict {
            let parsed = lenient(U128::parse_partial(a, config.input_radix), a)?;
            consumed = Some(parsed.consumed);
            parsed
        } else {
            exact(a, config.input_radix)?
        };
        let rhs = operand(op, config, |text| {
            parse_operand("b", text, |t| parse_unsigned(t, config.input_radix))
        })?;
        apply_unsigned(op, lhs.value, rhs).map(|o| (o, lhs.overflowed))
    };

    let (outcome, parse_overflow) = outcome.ok_or(CliError::MissingOperand {
        op: op.name(),
        name: "b",
    })?;
    debug!(op = op.name(), ?outcome, "evaluated");

    let mut report = Report {
        op: op.name(),
        signed: config.signed,
        radix: config.radix,
        value: None,
        ordering: None,
        overflow: parse_overflow,
        consumed,
    };
    match outcome {
        Outcome::Value { value, overflow } => {
            report.value = Some(value.to_str_radix(config.radix).map_err(CliError::Config)?);
            report.overflow |= overflow;
        }
        Outcome::Ordering(ordering) => report.ordering = Some(ordering_name(ordering)),
    }

    if report.overflow && config.strict {
        return Err(CliError::Overflow { op: op.name() });
    }
    Ok(report)
}

/// Shape the second operand for `op`, rejecting a missing or extra one.
fn operand<T>(
    op: Op,
    config: &AppConfig,
    parse: impl Fn(&str) -> Result<T, CliError>,
) -> Result<Rhs<T>, CliError> {
    let b = config.b.as_deref();
    match (op.arity(), b) {
        (Arity::Unary, None) => Ok(Rhs::None),
        (Arity::Unary, Some(_)) => Err(CliError::UnexpectedOperand {
            op: op.name(),
            name: "b",
        }),
        (_, None) => Err(CliError::MissingOperand {
            op: op.name(),
            name: "b",
        }),
        (Arity::Binary, Some(text)) => parse(text).map(Rhs::Value),
        (Arity::Shift, Some(text)) => shift_amount(text, config.input_radix).map(Rhs::Amount),
    }
}

fn parse_unsigned(text: &str, radix: Option<u32>) -> Result<U128, IntError> {
    match radix {
        Some(radix) => U128::from_str_radix(text, radix),
        None => text.parse(),
    }
}

fn parse_signed(text: &str, radix: Option<u32>) -> Result<I128, IntError> {
    match radix {
        Some(radix) => I128::from_str_radix(text, radix),
        None => text.parse(),
    }
}

fn parse_operand<T>(
    name: &'static str,
    text: &str,
    parse: impl Fn(&str) -> Result<T, IntError>,
) -> Result<T, CliError> {
    parse(text).map_err(|source| CliError::InvalidOperand {
        name,
        text: text.to_owned(),
        source,
    })
}

/// A strictly parsed first operand, in the shape of a lenient parse.
fn exact<T: Exact>(text: &str, radix: Option<u32>) -> Result<Parsed<T>, CliError> {
    let value = parse_operand("a", text, |t| T::parse_exact(t, radix))?;
    Ok(Parsed {
        value,
        consumed: text.len(),
        digits: 0,
        overflowed: false,
    })
}

trait Exact: Sized {
    fn parse_exact(text: &str, radix: Option<u32>) -> Result<Self, IntError>;
}

impl Exact for U128 {
    fn parse_exact(text: &str, radix: Option<u32>) -> Result<Self, IntError> {
        parse_unsigned(text, radix)
    }
}

impl Exact for I128 {
    fn parse_exact(text: &str, radix: Option<u32>) -> Result<Self, IntError> {
        parse_signed(text, radix)
    }
}

/// Accept a lenient parse that found at least one digit.
fn lenient<T>(parsed: Parsed<T>, text: &str) -> Result<Parsed<T>, CliError> {
    if parsed.digits == 0 {
        let source = if parsed.consumed < text.len() {
            IntError::InvalidDigit {
                offset: parsed.consumed,
            }
        } else {
            IntError::Empty
        };
        return Err(CliError::InvalidOperand {
            name: "a",
            text: text.to_owned(),
            source,
        });
    }
    if parsed.consumed < text.len() {
        warn!(
            offset = parsed.consumed,
            rest = text.get(parsed.consumed..).unwrap_or_default(),
            "parse stopped before the end of the input"
        );
    }
    Ok(parsed)
}

/// Shift amounts are plain unsigned integers; anything up to `u32::MAX` is valid.
fn shift_amount(text: &str, radix: Option<u32>) -> Result<u32, CliError> {
    let amount = parse_operand("b", text, |t| parse_unsigned(t, radix))?;
    amount
        .to_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| CliError::ShiftAmount(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn eval(args: &[&str]) -> Result<Report, CliError> {
        let config = AppConfig::try_parse_from(std::iter::once("limb128").chain(args.iter().copied()))
            .unwrap();
        let op = config.op.unwrap();
        evaluate(&config, op)
    }

    #[test]
    fn add_wraps_with_flag() {
        let report = eval(&["add", "0xffffffffffffffffffffffffffffffff", "1"]).unwrap();
        assert_eq!(report.value.as_deref(), Some("0"));
        assert!(report.overflow);
    }

    #[test]
    fn strict_overflow_is_an_error() {
        let err = eval(&["--strict", "add", "0xffffffffffffffffffffffffffffffff", "1"]).unwrap_err();
        assert!(matches!(err, CliError::Overflow { op: "add" }));
    }

    #[test]
    fn signed_mul_in_hex() {
        let report = eval(&["--signed", "--radix", "16", "mul", "-8", "16"]).unwrap();
        assert_eq!(report.value.as_deref(), Some("-0x80"));
        assert!(!report.overflow);
    }

    #[test]
    fn cmp_reports_ordering() {
        let report = eval(&["--signed", "cmp", "-1", "1"]).unwrap();
        assert_eq!(report.ordering, Some("less"));
        let report = eval(&["cmp", "0x10", "16"]).unwrap();
        assert_eq!(report.ordering, Some("equal"));
    }

    #[test]
    fn lenient_parse_reports_consumed() {
        let report = eval(&["parse", "0x1f;tail", "--radix", "10"]).unwrap();
        assert_eq!(report.value.as_deref(), Some("31"));
        assert_eq!(report.consumed, Some(4));
    }

    #[test]
    fn lenient_parse_without_digits_fails() {
        let err = eval(&["parse", "zz"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidOperand {
                source: IntError::InvalidDigit { offset: 0 },
                ..
            }
        ));
    }

    #[test]
    fn strict_parse_rejects_trailing_text() {
        assert!(eval(&["--strict", "parse", "12;"]).is_err());
    }

    #[test]
    fn operand_count_checked() {
        assert!(matches!(
            eval(&["add", "1"]).unwrap_err(),
            CliError::MissingOperand { name: "b", .. }
        ));
        assert!(matches!(
            eval(&["neg", "1", "2"]).unwrap_err(),
            CliError::UnexpectedOperand { name: "b", .. }
        ));
    }

    #[test]
    fn shift_amounts() {
        let report = eval(&["shl", "1", "127", "--radix", "16"]).unwrap();
        assert_eq!(report.value.as_deref(), Some("0x80000000000000000000000000000000"));
        let report = eval(&["shr", "1", "4000"]).unwrap();
        assert_eq!(report.value.as_deref(), Some("0"));
        assert!(matches!(
            eval(&["shl", "1", "0x100000000"]).unwrap_err(),
            CliError::ShiftAmount(_)
        ));
    }

    #[test]
    fn bad_radix_is_config_error() {
        assert!(matches!(
            eval(&["--radix", "37", "add", "1", "2"]).unwrap_err(),
            CliError::Config(IntError::InvalidRadix(37))
        ));
        assert!(matches!(
            eval(&["--input-radix", "1", "add", "1", "2"]).unwrap_err(),
            CliError::Config(IntError::InvalidRadix(1))
        ));
    }

    #[test]
    fn unsigned_rejects_negative() {
        assert!(matches!(
            eval(&["add", "-1", "2"]).unwrap_err(),
            CliError::InvalidOperand {
                source: IntError::Negative,
                ..
            }
        ));
    }
}
