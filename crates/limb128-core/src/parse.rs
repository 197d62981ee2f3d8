//! Radix parsing.
//!
//! [`U128::parse_partial`] and [`I128::parse_partial`] never fail: they stop
//! at the first character that cannot continue the number and report how
//! far they got, so a caller can tell whether the whole input was used.
//! The `FromStr` and `from_str_radix` forms build on the same scan and
//! reject anything that was not fully consumed.
//!
//! Accepted shape, in order:
//!
//! 1. any run of `+`, `-` and whitespace; each `-` flips the sign;
//! 2. an optional `0b`, `0o`, `0d` or `0x` prefix (either case);
//! 3. digits `0-9`, `a-z`, `A-Z` valid for the radix, with `_`, `,` and
//!    whitespace skipped anywhere among them.

use std::str::FromStr;

use tracing::trace;

use crate::error::IntError;
use crate::signed::I128;
use crate::unsigned::U128;
use crate::{MAX_RADIX, MIN_RADIX};

/// Outcome of a lenient parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    /// The parsed value, wrapped modulo `2^128` if it overflowed.
    pub value: T,
    /// Byte offset at which parsing stopped.
    pub consumed: usize,
    /// Number of digit characters accumulated.
    pub digits: usize,
    /// The magnitude did not fit the target type.
    pub overflowed: bool,
}

/// Magnitude and sign as read from the input, before any reinterpretation.
#[derive(Debug, Clone, Copy)]
struct Scan {
    magnitude: U128,
    negative: bool,
    consumed: usize,
    digits: usize,
    overflowed: bool,
}

impl Scan {
    fn stopped(consumed: usize, negative: bool) -> Self {
        Self {
            magnitude: U128::ZERO,
            negative,
            consumed,
            digits: 0,
            overflowed: false,
        }
    }
}

fn is_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

fn is_separator(ch: u8) -> bool {
    ch == b'_' || ch == b',' || is_space(ch)
}

/// Value of `ch` as a digit, if it is one in `radix`.
fn digit_value(ch: u8, radix: u32) -> Option<u32> {
    let digit = match ch {
        b'0'..=b'9' => ch - b'0',
        b'a'..=b'z' => ch - b'a' + 10,
        b'A'..=b'Z' => ch - b'A' + 10,
        _ => return None,
    };
    let digit = u32::from(digit);
    (digit < radix).then_some(digit)
}

/// Radix named by a two-character prefix at the start of `bytes`.
fn prefix_radix(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [b'0', b'b' | b'B', ..] => Some(2),
        [b'0', b'o' | b'O', ..] => Some(8),
        [b'0', b'd' | b'D', ..] => Some(10),
        [b'0', b'x' | b'X', ..] => Some(16),
        _ => None,
    }
}

fn scan(s: &str, radix: Option<u32>) -> Scan {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut negative = false;

    while i < bytes.len() {
        match bytes[i] {
            b'-' => negative = !negative,
            b'+' => {}
            ch if is_space(ch) => {}
            _ => break,
        }
        i += 1;
    }

    let radix = match (radix, prefix_radix(&bytes[i..])) {
        (Some(radix), _) if !(MIN_RADIX..=MAX_RADIX).contains(&radix) => {
            trace!(radix, "radix out of range, nothing parsed");
            return Scan::stopped(0, false);
        }
        (Some(radix), Some(prefix)) if radix != prefix => {
            // The whole prefix is consumed, but no digit is read after it.
            trace!(radix, prefix, offset = i + 2, "base prefix conflicts with radix");
            return Scan::stopped(i + 2, negative);
        }
        (_, Some(prefix)) => {
            i += 2;
            prefix
        }
        (Some(radix), None) => radix,
        (None, None) => 10,
    };

    let mut magnitude = U128::ZERO;
    let mut digits = 0;
    let mut overflowed = false;
    while i < bytes.len() {
        let ch = bytes[i];
        if is_separator(ch) {
            i += 1;
            continue;
        }
        let Some(digit) = digit_value(ch, radix) else {
            break;
        };
        // magnitude = magnitude * radix + digit
        let (scaled, o1) = magnitude.overflowing_mul_u64(u64::from(radix));
        let (next, o2) = scaled.overflowing_add_u64(u64::from(digit));
        magnitude = next;
        overflowed |= o1 || o2;
        digits += 1;
        i += 1;
    }

    if overflowed {
        trace!(radix, consumed = i, "magnitude wrapped past 128 bits");
    }

    Scan {
        magnitude,
        negative,
        consumed: i,
        digits,
        overflowed,
    }
}

/// Reject anything a lenient scan did not fully consume.
fn strict_scan(s: &str, radix: Option<u32>) -> Result<Scan, IntError> {
    if let Some(radix) = radix {
        IntError::check_radix(radix)?;
    }
    let scan = scan(s, radix);
    if scan.consumed < s.len() {
        return Err(IntError::InvalidDigit {
            offset: scan.consumed,
        });
    }
    if scan.digits == 0 {
        return Err(IntError::Empty);
    }
    if scan.overflowed {
        return Err(IntError::Overflow);
    }
    Ok(scan)
}

impl U128 {
    /// Parse as much of `s` as forms a number.
    ///
    /// `radix` of `None` means detect it from a prefix, else use 10. A
    /// leading `-` negates the result modulo `2^128`.
    ///
    /// ```
    /// use limb128_core::U128;
    /// let parsed = U128::parse_partial("0x1f;", None);
    /// assert_eq!(parsed.value, U128::from_u64(0x1f));
    /// assert_eq!(parsed.consumed, 4);
    /// ```
    #[must_use]
    pub fn parse_partial(s: &str, radix: Option<u32>) -> Parsed<Self> {
        let scan = scan(s, radix);
        let value = if scan.negative {
            scan.magnitude.wrapping_neg()
        } else {
            scan.magnitude
        };
        Parsed {
            value,
            consumed: scan.consumed,
            digits: scan.digits,
            overflowed: scan.overflowed,
        }
    }

    /// Parse all of `s` in `radix`. A matching prefix is allowed.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, IntError> {
        Self::from_scan(strict_scan(s, Some(radix))?)
    }

    fn from_scan(scan: Scan) -> Result<Self, IntError> {
        if scan.negative && !scan.magnitude.is_zero() {
            return Err(IntError::Negative);
        }
        Ok(scan.magnitude)
    }
}

impl FromStr for U128 {
    type Err = IntError;

    /// Parse all of `s`, detecting the radix from its prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_scan(strict_scan(s, None)?)
    }
}

impl I128 {
    /// Parse as much of `s` as forms a number; see [`U128::parse_partial`].
    ///
    /// `overflowed` is set when the magnitude is outside
    /// `[-2^127, 2^127 - 1]`; the value is then the wrapped bit pattern.
    #[must_use]
    pub fn parse_partial(s: &str, radix: Option<u32>) -> Parsed<Self> {
        let scan = scan(s, radix);
        let (value, out_of_range) = Self::from_magnitude(scan.magnitude, scan.negative);
        Parsed {
            value,
            consumed: scan.consumed,
            digits: scan.digits,
            overflowed: scan.overflowed || out_of_range,
        }
    }

    /// Parse all of `s` in `radix`. A matching prefix is allowed.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, IntError> {
        Self::from_scan(strict_scan(s, Some(radix))?)
    }

    fn from_scan(scan: Scan) -> Result<Self, IntError> {
        match Self::from_magnitude(scan.magnitude, scan.negative) {
            (value, false) => Ok(value),
            (_, true) => Err(IntError::Overflow),
        }
    }

    /// Apply the sign to a magnitude; flags magnitudes the sign cannot hold.
    fn from_magnitude(magnitude: U128, negative: bool) -> (Self, bool) {
        if negative {
            let out_of_range = magnitude > Self::MIN.as_unsigned();
            (magnitude.wrapping_neg().as_signed(), out_of_range)
        } else {
            let out_of_range = magnitude > Self::MAX.as_unsigned();
            (magnitude.as_signed(), out_of_range)
        }
    }
}

impl FromStr for I128 {
    type Err = IntError;

    /// Parse all of `s`, detecting the radix from its prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_scan(strict_scan(s, None)?)
    }
}
