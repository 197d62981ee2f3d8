//! Status flags of a 128-bit subtraction and the orderings derived from them.
//!
//! Every comparison operator on both types goes through [`Flags::compare`],
//! the way a CPU derives all of its conditional branches from one `cmp`.

use std::cmp::Ordering;

use crate::signed::I128;
use crate::unsigned::U128;

/// Facts about `a - b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Flags {
    /// `a - b == 0`
    pub zero: bool,
    /// Most significant bit of `a - b`.
    pub sign: bool,
    /// The unsigned subtraction borrowed out of the high limb.
    pub carry: bool,
    /// The signed subtraction left the representable range.
    pub overflow: bool,
}

impl Flags {
    /// Subtract and report both the wrapped difference and its flags.
    pub(crate) fn sub(a: U128, b: U128) -> (U128, Self) {
        let (diff, carry) = a.overflowing_sub(b);
        let sign = diff.msb();
        // Operands of differing sign whose result takes the subtrahend's sign.
        let overflow = (a.msb() != b.msb()) && (sign != a.msb());
        let flags = Self {
            zero: diff.is_zero(),
            sign,
            carry,
            overflow,
        };
        (diff, flags)
    }

    pub(crate) fn compare(a: U128, b: U128) -> Self {
        Self::sub(a, b).1
    }

    pub(crate) const fn unsigned_lt(self) -> bool {
        self.carry
    }

    pub(crate) const fn unsigned_le(self) -> bool {
        self.carry || self.zero
    }

    pub(crate) const fn signed_lt(self) -> bool {
        self.sign != self.overflow
    }

    pub(crate) const fn signed_le(self) -> bool {
        self.zero || self.signed_lt()
    }

    const fn ordering(self, less: bool) -> Ordering {
        if self.zero {
            Ordering::Equal
        } else if less {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl PartialEq for U128 {
    fn eq(&self, other: &Self) -> bool {
        Flags::compare(*self, *other).zero
    }
}

impl Eq for U128 {}

impl Ord for U128 {
    fn cmp(&self, other: &Self) -> Ordering {
        let flags = Flags::compare(*self, *other);
        flags.ordering(flags.unsigned_lt())
    }
}

impl PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn lt(&self, other: &Self) -> bool {
        Flags::compare(*self, *other).unsigned_lt()
    }

    fn le(&self, other: &Self) -> bool {
        Flags::compare(*self, *other).unsigned_le()
    }

    fn gt(&self, other: &Self) -> bool {
        Flags::compare(*other, *self).unsigned_lt()
    }

    fn ge(&self, other: &Self) -> bool {
        Flags::compare(*other, *self).unsigned_le()
    }
}

impl PartialEq for I128 {
    fn eq(&self, other: &Self) -> bool {
        Flags::compare(self.as_unsigned(), other.as_unsigned()).zero
    }
}

impl Eq for I128 {}

impl Ord for I128 {
    fn cmp(&self, other: &Self) -> Ordering {
        let flags = Flags::compare(self.as_unsigned(), other.as_unsigned());
        flags.ordering(flags.signed_lt())
    }
}

impl PartialOrd for I128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn lt(&self, other: &Self) -> bool {
        Flags::compare(self.as_unsigned(), other.as_unsigned()).signed_lt()
    }

    fn le(&self, other: &Self) -> bool {
        Flags::compare(self.as_unsigned(), other.as_unsigned()).signed_le()
    }

    fn gt(&self, other: &Self) -> bool {
        Flags::compare(other.as_unsigned(), self.as_unsigned()).signed_lt()
    }

    fn ge(&self, other: &Self) -> bool {
        Flags::compare(other.as_unsigned(), self.as_unsigned()).signed_le()
    }
}
