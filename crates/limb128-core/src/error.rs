//! Error type for strict parsing and radix validation.

/// Failure of a strict parse or of a formatting request.
///
/// Arithmetic never produces this: overflow there is a returned flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntError {
    /// No digits were found.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A character that is not a digit in the active radix.
    #[error("invalid digit at byte offset {offset}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        offset: usize,
    },

    /// The value does not fit in the target type.
    #[error("number too large to fit in 128 bits")]
    Overflow,

    /// A nonzero negative value was given for an unsigned type.
    #[error("negative value for an unsigned integer")]
    Negative,

    /// The radix is outside `2..=36`.
    #[error("radix {0} is outside 2..=36")]
    InvalidRadix(u32),
}

impl IntError {
    /// Check a radix, returning it unchanged when valid.
    pub fn check_radix(radix: u32) -> Result<u32, Self> {
        if (crate::MIN_RADIX..=crate::MAX_RADIX).contains(&radix) {
            Ok(radix)
        } else {
            Err(Self::InvalidRadix(radix))
        }
    }
}
