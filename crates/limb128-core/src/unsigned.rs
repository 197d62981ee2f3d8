//! Unsigned 128-bit integer stored as two 64-bit limbs.

use std::hash::{Hash, Hasher};

use crate::signed::I128;

/// An unsigned 128-bit integer with value `hi * 2^64 + lo`.
///
/// Every bit pattern is a valid value in `[0, 2^128)`. The field order is
/// not part of the contract; use [`U128::low_64`] and [`U128::high_64`].
#[derive(Clone, Copy, Default)]
pub struct U128 {
    lo: u64,
    hi: u64,
}

impl U128 {
    /// Width in bits.
    pub const BITS: u32 = 128;
    /// `0`
    pub const ZERO: Self = Self::from_limbs(0, 0);
    /// `1`
    pub const ONE: Self = Self::from_limbs(1, 0);
    /// `0`, the smallest value.
    pub const MIN: Self = Self::ZERO;
    /// `2^128 - 1`
    pub const MAX: Self = Self::from_limbs(u64::MAX, u64::MAX);

    /// Build a value from its low and high limbs.
    #[inline]
    #[must_use]
    pub const fn from_limbs(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    /// Bits `0..64`.
    #[inline]
    #[must_use]
    pub const fn low_64(self) -> u64 {
        self.lo
    }

    /// Bits `64..128`.
    #[inline]
    #[must_use]
    pub const fn high_64(self) -> u64 {
        self.hi
    }

    /// Zero-extend a 64-bit value.
    #[inline]
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self::from_limbs(value, 0)
    }

    /// Sign-extend a 64-bit value, so `-1` becomes [`U128::MAX`].
    #[inline]
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_i64(value: i64) -> Self {
        let hi = if value < 0 { u64::MAX } else { 0 };
        Self::from_limbs(value as u64, hi)
    }

    /// Narrow to 64 bits, or `None` if the high limb is in use.
    #[inline]
    #[must_use]
    pub const fn to_u64(self) -> Option<u64> {
        if self.hi == 0 {
            Some(self.lo)
        } else {
            None
        }
    }

    /// Reinterpret the same bits as two's complement.
    #[inline]
    #[must_use]
    pub const fn as_signed(self) -> I128 {
        I128::from_bits(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        (self.lo | self.hi) == 0
    }

    /// The most significant bit, which is the sign when read as [`I128`].
    #[inline]
    #[must_use]
    pub const fn msb(self) -> bool {
        (self.hi >> 63) != 0
    }

    /// Whether bit `n` is set. Bits at or above 128 read as zero.
    #[must_use]
    pub const fn bit(self, n: u32) -> bool {
        match n {
            0..=63 => (self.lo >> n) & 1 != 0,
            64..=127 => (self.hi >> (n - 64)) & 1 != 0,
            _ => false,
        }
    }

    #[must_use]
    pub const fn leading_zeros(self) -> u32 {
        if self.hi == 0 {
            64 + self.lo.leading_zeros()
        } else {
            self.hi.leading_zeros()
        }
    }

    #[must_use]
    pub const fn trailing_zeros(self) -> u32 {
        if self.lo == 0 {
            64 + self.hi.trailing_zeros()
        } else {
            self.lo.trailing_zeros()
        }
    }

    #[must_use]
    pub const fn count_ones(self) -> u32 {
        self.lo.count_ones() + self.hi.count_ones()
    }

    /// Number of significant bits; zero for [`U128::ZERO`].
    #[must_use]
    pub const fn bit_len(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }
}

impl Hash for U128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lo.hash(state);
        self.hi.hash(state);
    }
}

impl From<u8> for U128 {
    fn from(value: u8) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<u16> for U128 {
    fn from(value: u16) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<u32> for U128 {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<u64> for U128 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for U128 {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u128) -> Self {
        Self::from_limbs(value as u64, (value >> 64) as u64)
    }
}

impl From<U128> for u128 {
    fn from(value: U128) -> Self {
        (u128::from(value.hi) << 64) | u128::from(value.lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(U128::ZERO.low_64(), 0);
        assert_eq!(U128::ZERO.high_64(), 0);
        assert_eq!(U128::ONE.low_64(), 1);
        assert_eq!(U128::ONE.high_64(), 0);
        assert_eq!(U128::MAX.low_64(), u64::MAX);
        assert_eq!(U128::MAX.high_64(), u64::MAX);
        assert_eq!(U128::MIN, U128::ZERO);
    }

    #[test]
    fn from_u64_zero_extends() {
        let v = U128::from_u64(u64::MAX);
        assert_eq!(v.low_64(), u64::MAX);
        assert_eq!(v.high_64(), 0);
    }

    #[test]
    fn from_i64_sign_extends() {
        assert_eq!(U128::from_i64(-1), U128::MAX);
        assert_eq!(U128::from_i64(7), U128::from_u64(7));
        let min = U128::from_i64(i64::MIN);
        assert_eq!(min.low_64(), 1 << 63);
        assert_eq!(min.high_64(), u64::MAX);
    }

    #[test]
    fn to_u64_inverts_widening() {
        for v in [0, 1, 42, u64::MAX] {
            assert_eq!(U128::from_u64(v).to_u64(), Some(v));
        }
        assert_eq!(U128::from_limbs(0, 1).to_u64(), None);
    }

    #[test]
    fn bit_queries() {
        let v = U128::from_limbs(0b1010, 1 << 63);
        assert!(v.bit(1));
        assert!(!v.bit(0));
        assert!(v.bit(127));
        assert!(!v.bit(128));
        assert!(v.msb());
        assert_eq!(v.leading_zeros(), 0);
        assert_eq!(v.trailing_zeros(), 1);
        assert_eq!(v.count_ones(), 3);
    }

    #[test]
    fn zero_counts() {
        assert_eq!(U128::ZERO.leading_zeros(), 128);
        assert_eq!(U128::ZERO.trailing_zeros(), 128);
        assert_eq!(U128::ZERO.bit_len(), 0);
        assert_eq!(U128::ONE.bit_len(), 1);
        assert_eq!(U128::from_limbs(0, 1).bit_len(), 65);
        assert!(U128::ZERO.is_zero());
        assert!(!U128::from_limbs(0, 1).is_zero());
    }

    #[test]
    fn native_round_trip() {
        let n = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210_u128;
        let v = U128::from(n);
        assert_eq!(v.low_64(), 0xFEDC_BA98_7654_3210);
        assert_eq!(v.high_64(), 0x0123_4567_89AB_CDEF);
        assert_eq!(u128::from(v), n);
    }
}
