//! 64-bit limb primitives.
//!
//! The 128-bit types reduce every operation to these helpers. None of them
//! touch a native 128-bit integer: carries are recovered by comparing
//! against `u64::MAX` before adding, and the wide product is assembled
//! from four 32x32 partial products.

const HALF_BITS: u32 = 32;
const HALF_MASK: u64 = 0xFFFF_FFFF;

/// Add: a + b -> (sum, carry)
#[inline]
#[must_use]
pub fn overflowing_add(a: u64, b: u64) -> (u64, bool) {
    // a + b > max(u64)  <=>  a > max(u64) - b, and the right side never wraps.
    (a.wrapping_add(b), a > u64::MAX - b)
}

/// Add with carry: a + b + carry -> (sum, `carry_out`)
///
/// The carry is reported if either intermediate addition wrapped.
#[inline]
#[must_use]
pub fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, c1) = overflowing_add(a, b);
    let (sum, c2) = overflowing_add(sum, u64::from(carry));
    (sum, c1 || c2)
}

/// Subtract: a - b -> (diff, borrow)
#[inline]
#[must_use]
pub fn overflowing_sub(a: u64, b: u64) -> (u64, bool) {
    (a.wrapping_sub(b), a < b)
}

/// Subtract with borrow: a - b - borrow -> (diff, `borrow_out`)
#[inline]
#[must_use]
pub fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, b1) = overflowing_sub(a, b);
    let (diff, b2) = overflowing_sub(diff, u64::from(borrow));
    (diff, b1 || b2)
}

/// Multiply: a * b -> (low 64 bits, overflow)
#[inline]
#[must_use]
pub fn overflowing_mul(a: u64, b: u64) -> (u64, bool) {
    // a * b > max(u64)  <=>  a > max(u64) / b, for nonzero operands.
    let overflow = a != 0 && b != 0 && a > u64::MAX / b;
    (a.wrapping_mul(b), overflow)
}

/// Full product: a * b -> (low, high)
///
/// Each operand is split into 32-bit halves `a1:a0` and `b1:b0`. The four
/// partial products land at bit offsets 0, 32, 32 and 64:
///
/// ```text
///   |   hi[63..32] |   hi[31..0]  |   lo[63..32] |   lo[31..0]  |
///   |              |              |  p00[63..32] |  p00[31..0]  |
///   |              |  p10[63..32] |  p10[31..0]  |              |
///   |              |  p01[63..32] |  p01[31..0]  |              |
///   |  p11[63..32] |  p11[31..0]  |              |              |
/// ```
#[inline]
#[must_use]
pub fn mul_wide(a: u64, b: u64) -> (u64, u64) {
    let (a0, a1) = (a & HALF_MASK, a >> HALF_BITS);
    let (b0, b1) = (b & HALF_MASK, b >> HALF_BITS);

    let p00 = a0 * b0;
    let p10 = a1 * b0;
    let p01 = a0 * b1;
    let p11 = a1 * b1;

    // Column 32..96. At most (2^32 - 1)^2 + 2 * (2^32 - 1) = 2^64 - 1.
    let mid = p10 + (p01 & HALF_MASK) + (p00 >> HALF_BITS);

    let lo = (mid << HALF_BITS) | (p00 & HALF_MASK);
    let hi = p11 + (mid >> HALF_BITS) + (p01 >> HALF_BITS);
    (lo, hi)
}
