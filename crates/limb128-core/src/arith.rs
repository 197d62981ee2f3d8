//! Addition, subtraction, multiplication and negation.
//!
//! The `overflowing_*` forms are the core: each returns the wrapped result,
//! which is always valid, plus an overflow flag. `checked_*` and
//! `wrapping_*` are thin views over them, and the `std::ops` operators
//! wrap silently like fixed-width machine arithmetic.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::flags::Flags;
use crate::limbs;
use crate::signed::I128;
use crate::unsigned::U128;

impl U128 {
    /// `self + rhs`, and whether the sum exceeded [`U128::MAX`].
    #[must_use]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (lo, carry) = limbs::overflowing_add(self.low_64(), rhs.low_64());
        let (hi, overflow) = limbs::carrying_add(self.high_64(), rhs.high_64(), carry);
        (Self::from_limbs(lo, hi), overflow)
    }

    /// `self - rhs`, and whether `self < rhs`.
    #[must_use]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (lo, borrow) = limbs::overflowing_sub(self.low_64(), rhs.low_64());
        let (hi, overflow) = limbs::borrowing_sub(self.high_64(), rhs.high_64(), borrow);
        (Self::from_limbs(lo, hi), overflow)
    }

    /// `self * rhs` truncated to 128 bits, and whether any bits were lost.
    ///
    /// With `a = a1:a0` and `b = b1:b0` in 64-bit limbs, the full product is
    /// `a0*b0 + 2^64 (a1*b0 + a0*b1) + 2^128 a1*b1`. The flag is set when the
    /// `a1*b1` term is nonzero, when either cross product needs more than
    /// 64 bits, or when folding the cross products into the high limb
    /// carries out.
    #[must_use]
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let (a0, a1) = (self.low_64(), self.high_64());
        let (b0, b1) = (rhs.low_64(), rhs.high_64());

        let (lo, hi) = limbs::mul_wide(a0, b0);
        let (p10, o10) = limbs::overflowing_mul(a1, b0);
        let (p01, o01) = limbs::overflowing_mul(a0, b1);
        let (hi, c10) = limbs::overflowing_add(hi, p10);
        let (hi, c01) = limbs::overflowing_add(hi, p01);

        let p11 = a1 != 0 && b1 != 0;
        (Self::from_limbs(lo, hi), p11 || o10 || o01 || c10 || c01)
    }

    /// `self + rhs` for a 64-bit addend; the high limb only absorbs the carry.
    #[must_use]
    pub fn overflowing_add_u64(self, rhs: u64) -> (Self, bool) {
        let (lo, carry) = limbs::overflowing_add(self.low_64(), rhs);
        let (hi, overflow) = limbs::overflowing_add(self.high_64(), u64::from(carry));
        (Self::from_limbs(lo, hi), overflow)
    }

    /// `self - rhs` for a 64-bit subtrahend; the high limb only absorbs the borrow.
    #[must_use]
    pub fn overflowing_sub_u64(self, rhs: u64) -> (Self, bool) {
        let (lo, borrow) = limbs::overflowing_sub(self.low_64(), rhs);
        let (hi, overflow) = limbs::overflowing_sub(self.high_64(), u64::from(borrow));
        (Self::from_limbs(lo, hi), overflow)
    }

    /// `self * rhs` for a 64-bit multiplier; there is no `hi * hi` term.
    #[must_use]
    pub fn overflowing_mul_u64(self, rhs: u64) -> (Self, bool) {
        let (lo, hi) = limbs::mul_wide(self.low_64(), rhs);
        let (p10, o10) = limbs::overflowing_mul(self.high_64(), rhs);
        let (hi, carry) = limbs::overflowing_add(hi, p10);
        (Self::from_limbs(lo, hi), o10 || carry)
    }

    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.overflowing_mul(rhs) {
            (product, false) => Some(product),
            (_, true) => None,
        }
    }

    #[must_use]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    #[must_use]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    #[must_use]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        self.overflowing_mul(rhs).0
    }

    #[must_use]
    pub fn wrapping_add_u64(self, rhs: u64) -> Self {
        self.overflowing_add_u64(rhs).0
    }

    #[must_use]
    pub fn wrapping_sub_u64(self, rhs: u64) -> Self {
        self.overflowing_sub_u64(rhs).0
    }

    #[must_use]
    pub fn wrapping_mul_u64(self, rhs: u64) -> Self {
        self.overflowing_mul_u64(rhs).0
    }

    /// `2^128 - self`, computed as `!self + 1`. Zero stays zero.
    #[must_use]
    pub fn wrapping_neg(self) -> Self {
        (!self).wrapping_add(Self::ONE)
    }
}

impl I128 {
    /// `self + rhs`; overflow when both operands share a sign the sum lacks.
    #[must_use]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let sum = self.as_unsigned().wrapping_add(rhs.as_unsigned()).as_signed();
        let overflow =
            self.is_negative() == rhs.is_negative() && sum.is_negative() != self.is_negative();
        (sum, overflow)
    }

    /// `self - rhs`; the overflow flag of the comparison subtraction.
    #[must_use]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (diff, flags) = Flags::sub(self.as_unsigned(), rhs.as_unsigned());
        (diff.as_signed(), flags.overflow)
    }

    /// `self * rhs` wrapped to 128 bits.
    ///
    /// Two's-complement multiplication truncates the same way as unsigned,
    /// so the bits come from [`U128::wrapping_mul`]. Overflow is decided on
    /// the magnitudes: the exact product must fit `2^127 - 1`, or `2^127`
    /// when the result is negative.
    #[must_use]
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let product = self.as_unsigned().wrapping_mul(rhs.as_unsigned()).as_signed();
        let negative = self.is_negative() != rhs.is_negative();
        let (magnitude, overflow) = self.unsigned_abs().overflowing_mul(rhs.unsigned_abs());
        let limit = if negative {
            Self::MIN.as_unsigned()
        } else {
            Self::MAX.as_unsigned()
        };
        (product, overflow || magnitude > limit)
    }

    /// `-self`; overflows only for [`I128::MIN`].
    #[must_use]
    pub fn overflowing_neg(self) -> (Self, bool) {
        (self.wrapping_neg(), self == Self::MIN)
    }

    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.overflowing_mul(rhs) {
            (product, false) => Some(product),
            (_, true) => None,
        }
    }

    #[must_use]
    pub fn checked_neg(self) -> Option<Self> {
        match self.overflowing_neg() {
            (neg, false) => Some(neg),
            (_, true) => None,
        }
    }

    #[must_use]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.as_unsigned().wrapping_add(rhs.as_unsigned()).as_signed()
    }

    #[must_use]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.as_unsigned().wrapping_sub(rhs.as_unsigned()).as_signed()
    }

    #[must_use]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        self.as_unsigned().wrapping_mul(rhs.as_unsigned()).as_signed()
    }

    /// `-self`; [`I128::MIN`] maps to itself.
    #[must_use]
    pub fn wrapping_neg(self) -> Self {
        self.as_unsigned().wrapping_neg().as_signed()
    }

    /// `|self|` as a signed value; [`I128::MIN`] maps to itself.
    #[must_use]
    pub fn wrapping_abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// `|self|` as an unsigned value. Never overflows: `|MIN|` is `2^127`.
    #[must_use]
    pub fn unsigned_abs(self) -> U128 {
        let bits = self.as_unsigned();
        if self.is_negative() {
            bits.wrapping_neg()
        } else {
            bits
        }
    }
}

macro_rules! impl_wrapping_ops {
    ($ty:ty) => {
        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                *self = self.wrapping_add(rhs);
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.wrapping_sub(rhs);
            }
        }

        impl Mul for $ty {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
        }

        impl MulAssign for $ty {
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.wrapping_mul(rhs);
            }
        }
    };
}

impl_wrapping_ops!(U128);
impl_wrapping_ops!(I128);

impl Neg for I128 {
    type Output = Self;

    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u128) -> U128 {
        U128::from(v)
    }

    fn i(v: i128) -> I128 {
        I128::from(v)
    }

    #[test]
    fn add_wraps_at_max() {
        assert_eq!(U128::MAX.overflowing_add(U128::ONE), (U128::ZERO, true));
        assert_eq!(U128::MAX.checked_add(U128::ONE), None);
    }

    #[test]
    fn add_carries_into_high_limb() {
        let (sum, overflow) = u(u128::from(u64::MAX)).overflowing_add(U128::ONE);
        assert_eq!(sum, U128::from_limbs(0, 1));
        assert!(!overflow);
    }

    #[test]
    fn add_overflow_from_carry_alone() {
        // High limbs sum to MAX exactly; only the low carry pushes it over.
        let a = U128::from_limbs(u64::MAX, u64::MAX - 1);
        let (sum, overflow) = a.overflowing_add(U128::from_limbs(1, 1));
        assert_eq!(sum, U128::ZERO);
        assert!(overflow);
    }

    #[test]
    fn sub_wraps_below_zero() {
        assert_eq!(U128::ZERO.overflowing_sub(U128::ONE), (U128::MAX, true));
        assert_eq!(U128::ZERO.checked_sub(U128::ONE), None);
        assert_eq!(u(10).checked_sub(u(3)), Some(u(7)));
    }

    #[test]
    fn sub_borrows_from_high_limb() {
        let (diff, overflow) = U128::from_limbs(0, 1).overflowing_sub(U128::ONE);
        assert_eq!(diff, U128::from_limbs(u64::MAX, 0));
        assert!(!overflow);
    }

    #[test]
    fn u64_fast_paths() {
        assert_eq!(U128::MAX.overflowing_add_u64(1), (U128::ZERO, true));
        assert_eq!(
            U128::from_limbs(u64::MAX, 0).overflowing_add_u64(1),
            (U128::from_limbs(0, 1), false)
        );
        assert_eq!(U128::ZERO.overflowing_sub_u64(1), (U128::MAX, true));
        assert_eq!(
            U128::from_limbs(0, 1).overflowing_sub_u64(1),
            (U128::from_limbs(u64::MAX, 0), false)
        );
        assert_eq!(u(100).wrapping_sub_u64(1), u(99));
        assert_eq!(u(100).wrapping_add_u64(1), u(101));
    }

    #[test]
    fn mul_u64_fast_path() {
        let v = U128::from_limbs(u64::MAX, 3);
        let (product, overflow) = v.overflowing_mul_u64(10);
        assert!(!overflow);
        assert_eq!(u128::from(product), u128::from(v) * 10);

        assert!(U128::MAX.overflowing_mul_u64(2).1);
        assert!(!U128::MAX.overflowing_mul_u64(1).1);
        assert!(U128::from_limbs(0, 1 << 63).overflowing_mul_u64(2).1);
        assert_eq!(u(7).wrapping_mul_u64(6), u(42));
    }

    #[test]
    fn mul_full_width_fits() {
        let m = U128::from_u64(u64::MAX);
        let (product, overflow) = m.overflowing_mul(m);
        assert!(!overflow);
        assert_eq!(u128::from(product), u128::from(u64::MAX) * u128::from(u64::MAX));
    }

    #[test]
    fn mul_overflow_cases() {
        assert!(U128::MAX.overflowing_mul(U128::from_u64(2)).1);
        // hi * hi term
        let h = U128::from_limbs(0, 1);
        assert_eq!(h.overflowing_mul(h), (U128::ZERO, true));
        // cross term beyond 64 bits
        assert!(U128::from_limbs(0, 1 << 32)
            .overflowing_mul(U128::from_u64(1 << 32))
            .1);
        // cross term fits in 64 bits but folding it into the high limb carries out
        let a = U128::from_limbs(u64::MAX, 1);
        let (_, overflow) = a.overflowing_mul(U128::from_u64(u64::MAX));
        assert!(overflow);
        // 2^127 * 1 fits
        assert!(!U128::from_limbs(0, 1 << 63).overflowing_mul(U128::ONE).1);
    }

    #[test]
    fn mul_matches_repeated_addition() {
        for a in 0..20u64 {
            for b in 0..20u64 {
                let mut sum = U128::ZERO;
                for _ in 0..b {
                    sum += U128::from_u64(a);
                }
                assert_eq!(U128::from_u64(a) * U128::from_u64(b), sum);
            }
        }
    }

    #[test]
    fn unsigned_negation() {
        assert_eq!(U128::ZERO.wrapping_neg(), U128::ZERO);
        assert_eq!(U128::ONE.wrapping_neg(), U128::MAX);
        let v = U128::from_limbs(5, 9);
        assert_eq!(v.wrapping_neg().wrapping_neg(), v);
        assert_eq!(v + v.wrapping_neg(), U128::ZERO);
    }

    #[test]
    fn signed_add_overflow() {
        assert_eq!(I128::MAX.overflowing_add(I128::ONE), (I128::MIN, true));
        assert_eq!(I128::MIN.overflowing_add(I128::NEG_ONE), (I128::MAX, true));
        assert_eq!(I128::MIN.overflowing_add(I128::MAX), (I128::NEG_ONE, false));
        assert_eq!(i(-5).overflowing_add(i(3)), (i(-2), false));
        assert_eq!(I128::MAX.checked_add(I128::NEG_ONE), Some(i(i128::MAX - 1)));
    }

    #[test]
    fn signed_sub_overflow() {
        assert_eq!(I128::MIN.overflowing_sub(I128::ONE), (I128::MAX, true));
        assert_eq!(I128::MAX.overflowing_sub(I128::NEG_ONE), (I128::MIN, true));
        assert_eq!(I128::ZERO.overflowing_sub(I128::MIN), (I128::MIN, true));
        assert_eq!(I128::NEG_ONE.overflowing_sub(I128::MIN), (I128::MAX, false));
        assert_eq!(i(3).checked_sub(i(5)), Some(i(-2)));
    }

    #[test]
    fn signed_mul_overflow() {
        assert_eq!(i(-4).overflowing_mul(i(5)), (i(-20), false));
        assert_eq!(i(-4).overflowing_mul(i(-5)), (i(20), false));
        assert_eq!(I128::MIN.overflowing_mul(I128::ONE), (I128::MIN, false));
        assert_eq!(I128::MIN.overflowing_mul(I128::NEG_ONE), (I128::MIN, true));
        assert!(I128::MAX.overflowing_mul(i(2)).1);
        let half = i(1i128 << 126);
        assert_eq!(half.overflowing_mul(i(-2)), (I128::MIN, false));
        assert!(half.overflowing_mul(i(2)).1);
        assert_eq!(i(-7).checked_mul(I128::ZERO), Some(I128::ZERO));
    }

    #[test]
    fn signed_negation_and_abs() {
        assert_eq!(-i(5), i(-5));
        assert_eq!(-I128::MIN, I128::MIN);
        assert_eq!(I128::MIN.overflowing_neg(), (I128::MIN, true));
        assert_eq!(I128::MIN.checked_neg(), None);
        assert_eq!(I128::MAX.checked_neg(), Some(i(-i128::MAX)));
        assert_eq!(i(-9).wrapping_abs(), i(9));
        assert_eq!(I128::MIN.wrapping_abs(), I128::MIN);
        assert_eq!(I128::MIN.unsigned_abs(), U128::from_limbs(0, 1 << 63));
        assert_eq!(i(-1).unsigned_abs(), U128::ONE);
        assert_eq!(i(12).unsigned_abs(), u(12));
    }

    #[test]
    fn operators_wrap_without_panicking() {
        let mut v = U128::MAX;
        v += U128::ONE;
        assert_eq!(v, U128::ZERO);
        v -= U128::ONE;
        assert_eq!(v, U128::MAX);
        v *= u(2);
        assert_eq!(v, U128::MAX - U128::ONE);

        let mut s = I128::MAX;
        s += I128::ONE;
        assert_eq!(s, I128::MIN);
        s -= I128::ONE;
        assert_eq!(s, I128::MAX);
        s *= i(-1);
        assert_eq!(s, i(-i128::MAX));
    }
}
