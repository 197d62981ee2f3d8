//! `num-traits` integration, so generic numeric code accepts both types.

use num_traits::ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub};
use num_traits::{
    Bounded, CheckedAdd, CheckedMul, CheckedSub, One, WrappingAdd, WrappingMul, WrappingNeg,
    WrappingSub, Zero,
};

use crate::signed::I128;
use crate::unsigned::U128;

macro_rules! impl_num_traits {
    ($ty:ty) => {
        impl Zero for $ty {
            fn zero() -> Self {
                Self::ZERO
            }

            fn is_zero(&self) -> bool {
                Self::ZERO == *self
            }
        }

        impl One for $ty {
            fn one() -> Self {
                Self::ONE
            }
        }

        impl Bounded for $ty {
            fn min_value() -> Self {
                Self::MIN
            }

            fn max_value() -> Self {
                Self::MAX
            }
        }

        impl WrappingAdd for $ty {
            fn wrapping_add(&self, v: &Self) -> Self {
                <$ty>::wrapping_add(*self, *v)
            }
        }

        impl WrappingSub for $ty {
            fn wrapping_sub(&self, v: &Self) -> Self {
                <$ty>::wrapping_sub(*self, *v)
            }
        }

        impl WrappingMul for $ty {
            fn wrapping_mul(&self, v: &Self) -> Self {
                <$ty>::wrapping_mul(*self, *v)
            }
        }

        impl WrappingNeg for $ty {
            fn wrapping_neg(&self) -> Self {
                <$ty>::wrapping_neg(*self)
            }
        }

        impl CheckedAdd for $ty {
            fn checked_add(&self, v: &Self) -> Option<Self> {
                <$ty>::checked_add(*self, *v)
            }
        }

        impl CheckedSub for $ty {
            fn checked_sub(&self, v: &Self) -> Option<Self> {
                <$ty>::checked_sub(*self, *v)
            }
        }

        impl CheckedMul for $ty {
            fn checked_mul(&self, v: &Self) -> Option<Self> {
                <$ty>::checked_mul(*self, *v)
            }
        }

        impl OverflowingAdd for $ty {
            fn overflowing_add(&self, v: &Self) -> (Self, bool) {
                <$ty>::overflowing_add(*self, *v)
            }
        }

        impl OverflowingSub for $ty {
            fn overflowing_sub(&self, v: &Self) -> (Self, bool) {
                <$ty>::overflowing_sub(*self, *v)
            }
        }

        impl OverflowingMul for $ty {
            fn overflowing_mul(&self, v: &Self) -> (Self, bool) {
                <$ty>::overflowing_mul(*self, *v)
            }
        }
    };
}

impl_num_traits!(U128);
impl_num_traits!(I128);
