//! # limb128-core
//!
//! Fixed-width 128-bit signed and unsigned integers built from two 64-bit
//! limbs. Every operation reproduces native two's-complement semantics
//! bit-for-bit without relying on a native 128-bit type: carries and
//! borrows ripple across the limbs, and the wide product is assembled from
//! 32-bit partial products.
//!
//! Values are small `Copy` types; nothing here allocates except the
//! explicit [`U128::to_str_radix`] and [`I128::to_str_radix`] helpers.
//!
//! # Example
//! ```
//! use limb128_core::{U128, I128};
//!
//! let (sum, overflow) = U128::MAX.overflowing_add(U128::ONE);
//! assert_eq!(sum, U128::ZERO);
//! assert!(overflow);
//!
//! let x: I128 = "-0x80".parse().unwrap();
//! assert_eq!(x, I128::from_i64(-128));
//! assert_eq!(U128::from_u64(255).to_str_radix(16).unwrap(), "0xff");
//! ```

mod arith;
mod bitwise;
pub mod error;
mod flags;
mod format;
pub mod limbs;
pub mod parse;
mod signed;
mod traits;
mod unsigned;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use error::IntError;
pub use parse::Parsed;
pub use signed::I128;
pub use unsigned::U128;

/// Smallest radix accepted by parsing and formatting.
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by parsing and formatting (`0-9` then `a-z`).
pub const MAX_RADIX: u32 = 36;
