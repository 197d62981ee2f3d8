//! Limb-wise bitwise operators and cross-limb shifts.
//!
//! Shift amounts are defined for every `u32`: shifting by 128 or more
//! moves every bit out, leaving zero for logical shifts and the sign fill
//! for the arithmetic right shift.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use std::ops::{Not, Shl, ShlAssign, Shr, ShrAssign};

use crate::signed::I128;
use crate::unsigned::U128;

const LIMB_BITS: u32 = 64;

/// Mask with the top `64 - available` bits set.
const fn high_ones(available: u32) -> u64 {
    if available >= LIMB_BITS {
        0
    } else {
        !((1u64 << available) - 1)
    }
}

impl U128 {
    /// Logical left shift; `n >= 128` yields zero.
    #[must_use]
    pub const fn shift_left(self, n: u32) -> Self {
        let (lo, hi) = (self.low_64(), self.high_64());
        match n {
            0 => self,
            // Both limbs survive; the top of `lo` crosses into `hi`.
            1..=63 => Self::from_limbs(lo << n, (hi << n) | (lo >> (LIMB_BITS - n))),
            // `lo` is cleared completely.
            64..=127 => Self::from_limbs(0, lo << (n - LIMB_BITS)),
            _ => Self::ZERO,
        }
    }

    /// Logical right shift; `n >= 128` yields zero.
    #[must_use]
    pub const fn shift_right(self, n: u32) -> Self {
        let (lo, hi) = (self.low_64(), self.high_64());
        match n {
            0 => self,
            1..=63 => Self::from_limbs((lo >> n) | (hi << (LIMB_BITS - n)), hi >> n),
            64..=127 => Self::from_limbs(hi >> (n - LIMB_BITS), 0),
            _ => Self::ZERO,
        }
    }
}

impl I128 {
    /// Left shift; identical to the unsigned shift on the same bits.
    #[must_use]
    pub const fn shift_left(self, n: u32) -> Self {
        self.as_unsigned().shift_left(n).as_signed()
    }

    /// Right shift filling vacated bits with zero.
    #[must_use]
    pub const fn shift_right_logical(self, n: u32) -> Self {
        self.as_unsigned().shift_right(n).as_signed()
    }

    /// Right shift filling vacated bits with the sign.
    ///
    /// `n >= 128` yields `-1` for negative values and `0` otherwise.
    #[must_use]
    pub const fn shift_right_arithmetic(self, n: u32) -> Self {
        let shifted = self.as_unsigned().shift_right(n);
        if !self.is_negative() || n == 0 {
            return shifted.as_signed();
        }
        let fill = match n {
            // `64 - n` bits of the old high limb remain in place.
            1..=63 => U128::from_limbs(0, high_ones(LIMB_BITS - n)),
            // The high limb is all fill; `128 - n` bits remain in the low limb.
            64..=127 => U128::from_limbs(high_ones(2 * LIMB_BITS - n), u64::MAX),
            _ => U128::MAX,
        };
        U128::from_limbs(
            shifted.low_64() | fill.low_64(),
            shifted.high_64() | fill.high_64(),
        )
        .as_signed()
    }
}

macro_rules! impl_bitwise_ops {
    ($ty:ty) => {
        impl Not for $ty {
            type Output = Self;

            fn not(self) -> Self {
                let bits = self.as_bits();
                Self::with_bits(U128::from_limbs(!bits.low_64(), !bits.high_64()))
            }
        }

        impl BitAnd for $ty {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                let (a, b) = (self.as_bits(), rhs.as_bits());
                Self::with_bits(U128::from_limbs(
                    a.low_64() & b.low_64(),
                    a.high_64() & b.high_64(),
                ))
            }
        }

        impl BitOr for $ty {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                let (a, b) = (self.as_bits(), rhs.as_bits());
                Self::with_bits(U128::from_limbs(
                    a.low_64() | b.low_64(),
                    a.high_64() | b.high_64(),
                ))
            }
        }

        impl BitXor for $ty {
            type Output = Self;

            fn bitxor(self, rhs: Self) -> Self {
                let (a, b) = (self.as_bits(), rhs.as_bits());
                Self::with_bits(U128::from_limbs(
                    a.low_64() ^ b.low_64(),
                    a.high_64() ^ b.high_64(),
                ))
            }
        }

        impl BitAndAssign for $ty {
            fn bitand_assign(&mut self, rhs: Self) {
                *self = *self & rhs;
            }
        }

        impl BitOrAssign for $ty {
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }

        impl BitXorAssign for $ty {
            fn bitxor_assign(&mut self, rhs: Self) {
                *self = *self ^ rhs;
            }
        }

        impl Shl<u32> for $ty {
            type Output = Self;

            fn shl(self, n: u32) -> Self {
                self.shift_left(n)
            }
        }

        impl ShlAssign<u32> for $ty {
            fn shl_assign(&mut self, n: u32) {
                *self = self.shift_left(n);
            }
        }

        impl ShrAssign<u32> for $ty {
            fn shr_assign(&mut self, n: u32) {
                *self = *self >> n;
            }
        }
    };
}

// Uniform access to the bit pattern so one macro serves both types.
impl U128 {
    const fn as_bits(self) -> U128 {
        self
    }

    const fn with_bits(bits: U128) -> Self {
        bits
    }
}

impl I128 {
    const fn as_bits(self) -> U128 {
        self.as_unsigned()
    }

    const fn with_bits(bits: U128) -> Self {
        bits.as_signed()
    }
}

impl_bitwise_ops!(U128);
impl_bitwise_ops!(I128);

impl Shr<u32> for U128 {
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        self.shift_right(n)
    }
}

/// Arithmetic, as for native signed integers.
impl Shr<u32> for I128 {
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        self.shift_right_arithmetic(n)
    }
}
