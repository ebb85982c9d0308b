use serde::{Deserialize, Serialize};
use tracing::debug;

use super::checksum::{DoublingRule, first_non_digit, luhn_sum};
use super::error::LuhnError;

/// Checksum configuration for one identifier format.
///
/// Deserializable so format definitions can live in a caller's own
/// configuration; `remainder` defaults to 0 and `rule` to
/// [`DoublingRule::EvenCounterFromEnd`].
///
/// ```
/// use siret_luhn::LuhnParams;
///
/// assert!(LuhnParams::SIRET.validate("73282932000074").is_ok());
/// assert!(LuhnParams::SIRET.validate("73282932000075").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuhnParams {
    /// Modulus the weighted sum is reduced by.
    pub modulus: u32,
    /// Remainder a valid value must leave.
    #[serde(default)]
    pub remainder: u32,
    /// Minimum accepted length in characters.
    pub min_len: usize,
    /// Maximum accepted length in characters.
    pub max_len: usize,
    /// Which digits are doubled.
    #[serde(default = "default_rule")]
    pub rule: DoublingRule,
}

fn default_rule() -> DoublingRule {
    DoublingRule::EvenCounterFromEnd
}

impl LuhnParams {
    /// Payment card numbers: 13 to 19 digits, textbook Luhn.
    pub const CARD: Self = Self {
        modulus: 10,
        remainder: 0,
        min_len: 13,
        max_len: 19,
        rule: DoublingRule::EvenIndexFromStart,
    };

    /// SIRET establishment identifier: 14 digits.
    pub const SIRET: Self = Self {
        modulus: 10,
        remainder: 0,
        min_len: 14,
        max_len: 14,
        rule: DoublingRule::EvenCounterFromEnd,
    };

    /// SIREN registration number: 9 digits.
    pub const SIREN: Self = Self {
        modulus: 10,
        remainder: 0,
        min_len: 9,
        max_len: 9,
        rule: DoublingRule::EvenCounterFromEnd,
    };

    /// 2-digit TVA key followed by a SIREN: 11 digits.
    pub const TVA_KEYED: Self = Self {
        modulus: 10,
        remainder: 0,
        min_len: 11,
        max_len: 11,
        rule: DoublingRule::EvenCounterFromEnd,
    };

    /// Create parameters with remainder 0 and the counter-from-end rule.
    pub fn new(modulus: u32, min_len: usize, max_len: usize) -> Self {
        Self {
            modulus,
            remainder: 0,
            min_len,
            max_len,
            rule: DoublingRule::EvenCounterFromEnd,
        }
    }

    /// Set the remainder a valid value must leave.
    pub fn with_remainder(mut self, remainder: u32) -> Self {
        self.remainder = remainder;
        self
    }

    /// Set the doubling rule.
    pub fn with_rule(mut self, rule: DoublingRule) -> Self {
        self.rule = rule;
        self
    }

    /// Run the length, digit and checksum gates, in that order, on `value`
    /// exactly as given.
    pub fn validate(&self, value: &str) -> Result<(), LuhnError> {
        if self.modulus == 0 {
            return Err(LuhnError::ZeroModulus);
        }

        let len = value.chars().count();
        if len < self.min_len || len > self.max_len {
            debug!(value, len, min = self.min_len, max = self.max_len, "length out of range");
            return Err(LuhnError::Length {
                len,
                min: self.min_len,
                max: self.max_len,
            });
        }

        if let Some((position, ch)) = first_non_digit(value) {
            debug!(value, position, %ch, "not a sequence of digits");
            return Err(LuhnError::NonDigit { position, ch });
        }

        // min_len may be 0; an empty value has no digits to sum
        let sum = luhn_sum(value, self.rule).ok_or(LuhnError::Length {
            len,
            min: self.min_len.max(1),
            max: self.max_len,
        })?;
        let actual = sum % self.modulus;
        if actual != self.remainder {
            debug!(value, sum, actual, expected = self.remainder, "checksum mismatch");
            return Err(LuhnError::ChecksumMismatch {
                sum,
                modulus: self.modulus,
                actual,
                expected: self.remainder,
            });
        }
        Ok(())
    }
}
