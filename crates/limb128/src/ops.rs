//! Operation dispatch over the two integer types.

use std::cmp::Ordering;

use clap::ValueEnum;
use limb128_core::{I128, IntError, U128};

/// Operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Op {
    /// Parse `a` leniently and print it in the output radix.
    Parse,
    Add,
    Sub,
    Mul,
    Neg,
    Abs,
    Not,
    And,
    Or,
    Xor,
    /// Shift `a` left by `b` bits.
    Shl,
    /// Shift `a` right by `b` bits; arithmetic when `--signed`.
    Shr,
    /// Compare `a` with `b`.
    Cmp,
}

/// What an operation expects as its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    Shift,
}

impl Op {
    /// Name as typed on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Neg => "neg",
            Self::Abs => "abs",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Shl => "shl",
            Self::Shr => "shr",
            Self::Cmp => "cmp",
        }
    }

    #[must_use]
    pub fn arity(self) -> Arity {
        match self {
            Self::Parse | Self::Neg | Self::Abs | Self::Not => Arity::Unary,
            Self::Shl | Self::Shr => Arity::Shift,
            Self::Add | Self::Sub | Self::Mul | Self::And | Self::Or | Self::Xor | Self::Cmp => {
                Arity::Binary
            }
        }
    }
}

/// A value of either width-128 type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Unsigned(U128),
    Signed(I128),
}

impl Number {
    /// Sign, prefix and digits in `radix`.
    pub fn to_str_radix(self, radix: u32) -> Result<String, IntError> {
        match self {
            Self::Unsigned(v) => v.to_str_radix(radix),
            Self::Signed(v) => v.to_str_radix(radix),
        }
    }
}

/// Second operand, already shaped for the operation's arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rhs<T> {
    None,
    Value(T),
    Amount(u32),
}

/// Result of applying an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Value { value: Number, overflow: bool },
    Ordering(Ordering),
}

fn value(value: Number, overflow: bool) -> Option<Outcome> {
    Some(Outcome::Value { value, overflow })
}

/// Apply `op` to unsigned operands.
///
/// Returns `None` when `rhs` does not match the operation's arity.
#[must_use]
pub fn apply_unsigned(op: Op, a: U128, rhs: Rhs<U128>) -> Option<Outcome> {
    let wrap = |(v, o): (U128, bool)| value(Number::Unsigned(v), o);
    match (op, rhs) {
        (Op::Parse | Op::Abs, Rhs::None) => wrap((a, false)),
        (Op::Neg, Rhs::None) => wrap((a.wrapping_neg(), !a.is_zero())),
        (Op::Not, Rhs::None) => wrap((!a, false)),
        (Op::Add, Rhs::Value(b)) => wrap(a.overflowing_add(b)),
        (Op::Sub, Rhs::Value(b)) => wrap(a.overflowing_sub(b)),
        (Op::Mul, Rhs::Value(b)) => wrap(a.overflowing_mul(b)),
        (Op::And, Rhs::Value(b)) => wrap((a & b, false)),
        (Op::Or, Rhs::Value(b)) => wrap((a | b, false)),
        (Op::Xor, Rhs::Value(b)) => wrap((a ^ b, false)),
        (Op::Cmp, Rhs::Value(b)) => Some(Outcome::Ordering(a.cmp(&b))),
        (Op::Shl, Rhs::Amount(n)) => wrap((a << n, false)),
        (Op::Shr, Rhs::Amount(n)) => wrap((a >> n, false)),
        _ => None,
    }
}

/// Apply `op` to signed operands. `shr` is arithmetic.
///
/// Returns `None` when `rhs` does not match the operation's arity.
#[must_use]
pub fn apply_signed(op: Op, a: I128, rhs: Rhs<I128>) -> Option<Outcome> {
    let wrap = |(v, o): (I128, bool)| value(Number::Signed(v), o);
    match (op, rhs) {
        (Op::Parse, Rhs::None) => wrap((a, false)),
        (Op::Neg, Rhs::None) => wrap(a.overflowing_neg()),
        (Op::Abs, Rhs::None) => wrap((a.wrapping_abs(), a == I128::MIN)),
        (Op::Not, Rhs::None) => wrap((!a, false)),
        (Op::Add, Rhs::Value(b)) => wrap(a.overflowing_add(b)),
        (Op::Sub, Rhs::Value(b)) => wrap(a.overflowing_sub(b)),
        (Op::Mul, Rhs::Value(b)) => wrap(a.overflowing_mul(b)),
        (Op::And, Rhs::Value(b)) => wrap((a & b, false)),
        (Op::Or, Rhs::Value(b)) => wrap((a | b, false)),
        (Op::Xor, Rhs::Value(b)) => wrap((a ^ b, false)),
        (Op::Cmp, Rhs::Value(b)) => Some(Outcome::Ordering(a.cmp(&b))),
        (Op::Shl, Rhs::Amount(n)) => wrap((a << n, false)),
        (Op::Shr, Rhs::Amount(n)) => wrap((a >> n, false)),
        _ => None,
    }
}
