//! Generic Luhn-family checks over raw and normalized candidate strings.

use super::checksum::DoublingRule;
use super::error::LuhnError;
use super::params::LuhnParams;

/// Trim surrounding whitespace and drop every internal space.
///
/// Only `' '` is removed from the inside; tabs or other separators are left
/// in place and will fail the digit gate.
pub fn normalize(value: &str) -> String {
    value.trim().chars().filter(|&c| c != ' ').collect()
}

/// Validate `value` exactly as given (no trimming) against `params`.
pub fn validate_generic(value: &str, params: &LuhnParams) -> Result<(), LuhnError> {
    params.validate(value)
}

/// Normalize `value`, validate it against `params` and return the
/// normalized form.
pub fn validate_luhn(value: &str, params: &LuhnParams) -> Result<String, LuhnError> {
    let normalized = normalize(value);
    params.validate(&normalized)?;
    Ok(normalized)
}

/// Check a raw value whose digits at even positions from the left are
/// doubled, against `modulus` / `remainder` and the length bounds.
///
/// Malformed input is a plain `false`.
///
/// ```
/// assert!(siret_luhn::check_generic("4532015112830366", 10, 0, 13, 19));
/// assert!(!siret_luhn::check_generic("4532015112830367", 10, 0, 13, 19));
/// ```
pub fn check_generic(
    value: &str,
    modulus: u32,
    remainder: u32,
    min_len: usize,
    max_len: usize,
) -> bool {
    let params = LuhnParams::new(modulus, min_len, max_len)
        .with_remainder(remainder)
        .with_rule(DoublingRule::EvenIndexFromStart);
    validate_generic(value, &params).is_ok()
}

/// Normalize `value` and check it under textbook Luhn (remainder 0) with the
/// given modulus and length bounds.
///
/// Returns `(true, normalized)` on success and `(false, "")` otherwise.
pub fn check_luhn(value: &str, modulus: u32, min_len: usize, max_len: usize) -> (bool, String) {
    match validate_luhn(value, &LuhnParams::new(modulus, min_len, max_len)) {
        Ok(normalized) => (true, normalized),
        Err(_) => (false, String::new()),
    }
}
