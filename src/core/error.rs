use thiserror::Error;

/// Reasons a candidate string fails a Luhn-family check.
///
/// The boolean and tuple check functions collapse these into a plain
/// negative result; the `validate_*` functions hand them back to callers
/// that want to know why a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LuhnError {
    /// Length (in characters, after normalization) is outside the allowed bounds.
    #[error("length {len} outside allowed range {min}..={max}")]
    Length {
        /// Actual length of the candidate.
        len: usize,
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// A character other than an ASCII decimal digit was found.
    #[error("non-digit character {ch:?} at position {position}")]
    NonDigit {
        /// 0-based character position from the left.
        position: usize,
        /// The offending character.
        ch: char,
    },

    /// The weighted digit sum does not hit the target remainder.
    #[error("checksum {sum} mod {modulus} is {actual}, expected {expected}")]
    ChecksumMismatch {
        /// Weighted digit sum.
        sum: u32,
        /// Modulus the sum was reduced by.
        modulus: u32,
        /// Remainder actually obtained.
        actual: u32,
        /// Remainder the format requires.
        expected: u32,
    },

    /// A modulus of zero cannot be satisfied.
    #[error("modulus must be non-zero")]
    ZeroModulus,
}
