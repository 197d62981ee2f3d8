//! Radix formatting.
//!
//! Digits are produced least significant first into a fixed stack buffer,
//! so the `core::fmt` implementations never allocate. Two strategies:
//!
//! - power-of-two radices pull several `log2(radix)`-bit groups out of the
//!   low limb per shift, then split the batch with `bits & (radix - 1)`;
//! - other radices divide by the *fast base*, the largest power of the
//!   radix that fits a 32-bit divisor, and emit that many digits per
//!   division, zero-padded.
//!
//! Every batch is written at full width and the leading zeros trimmed at
//! the end, which leaves only the most significant batch unpadded.

use std::fmt;

use crate::error::IntError;
use crate::signed::I128;
use crate::unsigned::U128;

const LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Binary needs the most digits: one per bit.
const BUF_LEN: usize = 128;

/// Digits of one value, right-aligned in a stack buffer.
pub(crate) struct Digits {
    buf: [u8; BUF_LEN],
    start: usize,
}

impl Digits {
    fn new() -> Self {
        Self {
            buf: [b'0'; BUF_LEN],
            start: BUF_LEN,
        }
    }

    fn push(&mut self, digit: u8) {
        self.start -= 1;
        self.buf[self.start] = digit;
    }

    /// Drop leading zeros, keeping at least one digit.
    fn trim(&mut self) {
        while self.start < BUF_LEN - 1 && self.buf[self.start] == b'0' {
            self.start += 1;
        }
    }

    /// Only bytes from the ASCII digit tables are ever written, so the
    /// conversion cannot fail and the empty fallback is never taken.
    pub(crate) fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[self.start..]).unwrap_or_default()
    }

    pub(crate) fn len(&self) -> usize {
        BUF_LEN - self.start
    }

    /// Render `value` in `radix`, which must already be in `2..=36`.
    pub(crate) fn render(value: U128, radix: u32, upper: bool) -> Self {
        let table = if upper { UPPER } else { LOWER };
        let mut digits = Self::new();
        if radix.is_power_of_two() {
            digits.render_power_of_two(value, radix, table);
        } else {
            digits.render_fast_base(value, radix, table);
        }
        digits.trim();
        digits
    }

    fn render_power_of_two(&mut self, value: U128, radix: u32, table: &[u8; 36]) {
        let shift = radix.trailing_zeros();
        let per_batch = u64::BITS / shift;
        let batch_bits = per_batch * shift;
        let batch_mask = if batch_bits == u64::BITS {
            u64::MAX
        } else {
            (1u64 << batch_bits) - 1
        };
        let digit_mask = u64::from(radix - 1);

        let mut rest = value;
        loop {
            let mut bits = rest.low_64() & batch_mask;
            rest = rest.shift_right(batch_bits);
            for _ in 0..per_batch {
                self.push(table[index(bits & digit_mask)]);
                bits >>= shift;
            }
            if rest.is_zero() {
                break;
            }
        }
    }

    fn render_fast_base(&mut self, value: U128, radix: u32, table: &[u8; 36]) {
        let (fast_base, per_batch) = fast_base(radix);
        let mut rest = value;
        loop {
            let (quotient, mut batch) = div_rem_u32(rest, fast_base);
            rest = quotient;
            for _ in 0..per_batch {
                self.push(table[index(u64::from(batch % radix))]);
                batch /= radix;
            }
            if rest.is_zero() {
                break;
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn index(digit: u64) -> usize {
    digit as usize
}

/// Largest power of `radix` that fits in a `u32`, and its exponent.
pub(crate) fn fast_base(radix: u32) -> (u32, u32) {
    let mut base = radix;
    let mut count = 1;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        count += 1;
    }
    (base, count)
}

/// Long division of `value` by a 32-bit divisor, one 32-bit half-limb at a
/// time so every intermediate fits in a `u64`.
///
/// Internal to formatting: division is not part of the public arithmetic.
pub(crate) fn div_rem_u32(value: U128, divisor: u32) -> (U128, u32) {
    const HALF: u32 = 32;
    const MASK: u64 = 0xFFFF_FFFF;

    let d = u64::from(divisor);
    let (lo, hi) = (value.low_64(), value.high_64());
    let halves = [hi >> HALF, hi & MASK, lo >> HALF, lo & MASK];

    let mut quotient = [0u64; 4];
    let mut rem = 0u64;
    for (q, half) in quotient.iter_mut().zip(halves) {
        // rem < d < 2^32, so the shifted remainder never loses bits.
        let current = (rem << HALF) | half;
        *q = current / d;
        rem = current % d;
    }

    let quotient = U128::from_limbs(
        (quotient[2] << HALF) | quotient[3],
        (quotient[0] << HALF) | quotient[1],
    );
    #[allow(clippy::cast_possible_truncation)]
    let rem = rem as u32;
    (quotient, rem)
}

/// Literal prefix for the radices that have a conventional one.
pub(crate) fn radix_prefix(radix: u32) -> &'static str {
    match radix {
        2 => "0b",
        8 => "0o",
        16 => "0x",
        _ => "",
    }
}

fn write_radix(negative: bool, magnitude: U128, radix: u32) -> Result<String, IntError> {
    let radix = IntError::check_radix(radix)?;
    let digits = Digits::render(magnitude, radix, false);
    let prefix = radix_prefix(radix);
    let mut out = String::with_capacity(usize::from(negative) + prefix.len() + digits.len());
    if negative {
        out.push('-');
    }
    out.push_str(prefix);
    out.push_str(digits.as_str());
    Ok(out)
}

fn radix_len(negative: bool, magnitude: U128, radix: u32) -> Result<usize, IntError> {
    let radix = IntError::check_radix(radix)?;
    let digits = Digits::render(magnitude, radix, false);
    Ok(usize::from(negative) + radix_prefix(radix).len() + digits.len())
}

impl U128 {
    /// Render in `radix`, with a `0b`, `0o` or `0x` prefix for 2, 8 and 16.
    ///
    /// ```
    /// use limb128_core::U128;
    /// assert_eq!(U128::from_u64(255).to_str_radix(16).unwrap(), "0xff");
    /// assert_eq!(U128::from_u64(255).to_str_radix(10).unwrap(), "255");
    /// ```
    pub fn to_str_radix(self, radix: u32) -> Result<String, IntError> {
        write_radix(false, self, radix)
    }

    /// Length of [`U128::to_str_radix`] output, computed without allocating.
    pub fn formatted_len(self, radix: u32) -> Result<usize, IntError> {
        radix_len(false, self, radix)
    }
}

impl I128 {
    /// Render in `radix` as sign, prefix and magnitude, e.g. `-0x80`.
    pub fn to_str_radix(self, radix: u32) -> Result<String, IntError> {
        write_radix(self.is_negative(), self.unsigned_abs(), radix)
    }

    /// Length of [`I128::to_str_radix`] output, computed without allocating.
    pub fn formatted_len(self, radix: u32) -> Result<usize, IntError> {
        radix_len(self.is_negative(), self.unsigned_abs(), radix)
    }
}

impl fmt::Display for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", Digits::render(*self, 10, false).as_str())
    }
}

impl fmt::Debug for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for I128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = Digits::render(self.unsigned_abs(), 10, false);
        f.pad_integral(!self.is_negative(), "", digits.as_str())
    }
}

impl fmt::Debug for I128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Radix traits print the raw bit pattern, like native integers do for
// negative values: `format!("{:x}", I128::NEG_ONE)` is 32 `f`s.
macro_rules! impl_radix_fmt {
    ($trait:ident, $radix:expr, $prefix:expr, $upper:expr) => {
        impl fmt::$trait for U128 {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, $prefix, Digits::render(*self, $radix, $upper).as_str())
            }
        }

        impl fmt::$trait for I128 {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$trait::fmt(&self.as_unsigned(), f)
            }
        }
    };
}

impl_radix_fmt!(LowerHex, 16, "0x", false);
impl_radix_fmt!(UpperHex, 16, "0x", true);
impl_radix_fmt!(Octal, 8, "0o", false);
impl_radix_fmt!(Binary, 2, "0b", false);
