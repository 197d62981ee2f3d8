//! Signed 128-bit integer: the [`U128`] bit pattern read as two's complement.

use std::hash::{Hash, Hasher};

use crate::unsigned::U128;

/// A signed 128-bit two's-complement integer in `[-2^127, 2^127 - 1]`.
///
/// Shares its physical layout with [`U128`]; the sign is the most
/// significant bit of the high limb.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct I128(U128);

impl I128 {
    /// Width in bits.
    pub const BITS: u32 = 128;
    /// `0`
    pub const ZERO: Self = Self(U128::ZERO);
    /// `1`
    pub const ONE: Self = Self(U128::ONE);
    /// `-1`, all bits set.
    pub const NEG_ONE: Self = Self(U128::MAX);
    /// `-2^127`, only the sign bit set.
    pub const MIN: Self = Self(U128::from_limbs(0, 1 << 63));
    /// `2^127 - 1`, every bit but the sign set.
    pub const MAX: Self = Self(U128::from_limbs(u64::MAX, u64::MAX >> 1));

    /// Reinterpret unsigned bits as two's complement.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: U128) -> Self {
        Self(bits)
    }

    /// Reinterpret as unsigned; the bits are unchanged.
    #[inline]
    #[must_use]
    pub const fn as_unsigned(self) -> U128 {
        self.0
    }

    /// Build a value from its low limb and signed high limb.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_limbs(lo: u64, hi: i64) -> Self {
        Self(U128::from_limbs(lo, hi as u64))
    }

    /// Bits `0..64`.
    #[inline]
    #[must_use]
    pub const fn low_64(self) -> u64 {
        self.0.low_64()
    }

    /// Bits `64..128`, carrying the sign.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn high_64(self) -> i64 {
        self.0.high_64() as i64
    }

    /// Sign-extend a 64-bit value.
    #[inline]
    #[must_use]
    pub const fn from_i64(value: i64) -> Self {
        Self(U128::from_i64(value))
    }

    /// Zero-extend a 64-bit value; always non-negative.
    #[inline]
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self(U128::from_u64(value))
    }

    /// Narrow to 64 bits, or `None` if the value needs the high limb.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn to_i64(self) -> Option<i64> {
        let lo = self.0.low_64() as i64;
        // Fits iff the high limb is just the sign extension of `lo`.
        let extension = if lo < 0 { u64::MAX } else { 0 };
        if self.0.high_64() == extension {
            Some(lo)
        } else {
            None
        }
    }

    /// The sign bit. Zero counts as non-negative.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0.msb()
    }

    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        !self.is_negative() && !self.0.is_zero()
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// `-1`, `0` or `1` by sign.
    #[must_use]
    pub const fn signum(self) -> Self {
        if self.is_negative() {
            Self::NEG_ONE
        } else if self.0.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }
}

impl Hash for I128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl From<i8> for I128 {
    fn from(value: i8) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<i16> for I128 {
    fn from(value: i16) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<i32> for I128 {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<i64> for I128 {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i128> for I128 {
    #[allow(clippy::cast_sign_loss)]
    fn from(value: i128) -> Self {
        Self(U128::from(value as u128))
    }
}

impl From<I128> for i128 {
    #[allow(clippy::cast_possible_wrap)]
    fn from(value: I128) -> Self {
        u128::from(value.0) as i128
    }
}
