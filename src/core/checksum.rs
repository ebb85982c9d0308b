//! Weighted digit-sum computation shared by every identifier format.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which digits of a candidate get doubled.
///
/// The two conventions select different digits on odd-length inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoublingRule {
    /// Digit at 0-based position `i` from the left is doubled when `i` is even.
    ///
    /// On even-length inputs (payment cards) this picks the same digits as
    /// textbook Luhn.
    EvenIndexFromStart,
    /// Digit at 1-based counter `c` from the right is doubled when `c` is even.
    ///
    /// Textbook Luhn for any length. Used by SIRET, SIREN and TVA keys.
    EvenCounterFromEnd,
}

impl DoublingRule {
    /// Whether the digit at `index` (0-based from the left) of a `len`-long
    /// string is doubled. Callers guarantee `index < len`.
    #[inline]
    pub(crate) fn doubles(self, index: usize, len: usize) -> bool {
        debug_assert!(index < len);
        match self {
            Self::EvenIndexFromStart => index % 2 == 0,
            Self::EvenCounterFromEnd => (len - index) % 2 == 0,
        }
    }
}

/// Double a single digit, folding values above 9 back into one digit.
#[inline]
pub fn double_digit(digit: u32) -> u32 {
    let v = 2 * digit;
    if v > 9 { v - 9 } else { v }
}

/// Return the position and value of the first character that is not an
/// ASCII decimal digit.
///
/// Signs, whitespace and non-ASCII digits all count as non-digits.
pub fn first_non_digit(value: &str) -> Option<(usize, char)> {
    value.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
}

/// `true` if `value` is non-empty and made only of ASCII decimal digits.
pub fn is_ascii_digits(value: &str) -> bool {
    !value.is_empty() && first_non_digit(value).is_none()
}

/// Weighted digit sum of `digits` under `rule`.
///
/// Returns `None` when `digits` is empty or contains anything but `0`-`9`.
pub fn luhn_sum(digits: &str, rule: DoublingRule) -> Option<u32> {
    if !is_ascii_digits(digits) {
        return None;
    }
    let len = digits.len();
    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if rule.doubles(i, len) {
                double_digit(d)
            } else {
                d
            }
        })
        .sum();
    Some(sum)
}

/// Check whether the weighted digit sum of `digits` leaves `remainder`
/// when divided by `modulus`.
///
/// A zero modulus or a non-digit input never matches.
pub fn compute_and_compare(
    digits: &str,
    modulus: u32,
    remainder: u32,
    rule: DoublingRule,
) -> bool {
    if modulus == 0 {
        return false;
    }
    match luhn_sum(digits, rule) {
        Some(sum) => {
            trace!(digits, sum, modulus, remainder, ?rule, "luhn sum computed");
            sum % modulus == remainder
        }
        None => false,
    }
}

/// Compute the digit that, appended to `payload`, makes the whole string
/// pass a mod-10 / remainder-0 check under `rule`.
///
/// Returns `None` if `payload` is empty or not all digits.
pub fn check_digit(payload: &str, rule: DoublingRule) -> Option<u8> {
    if !is_ascii_digits(payload) {
        return None;
    }
    let mut candidate = String::with_capacity(payload.len() + 1);
    candidate.push_str(payload);
    candidate.push('0');
    let last = candidate.len() - 1;
    let base = luhn_sum(&candidate, rule)?;
    let weight = |d: u32| {
        if rule.doubles(last, candidate.len()) {
            double_digit(d)
        } else {
            d
        }
    };
    // the trailing '0' contributed nothing, so only the new digit's weight matters
    (0..=9u32)
        .find(|&d| (base + weight(d)) % 10 == 0)
        .map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_folds_above_nine() {
        let doubled: Vec<u32> = (0..=9).map(double_digit).collect();
        assert_eq!(doubled, vec![0, 2, 4, 6, 8, 1, 3, 5, 7, 9]);
    }

    #[test]
    fn doubling_positions_at_both_ends() {
        let rule = DoublingRule::EvenCounterFromEnd;
        assert!(!rule.doubles(13, 14));
        assert!(rule.doubles(12, 14));
        assert!(rule.doubles(0, 14));
        assert!(!rule.doubles(0, 11));
        let rule = DoublingRule::EvenIndexFromStart;
        assert!(rule.doubles(0, 11));
        assert!(rule.doubles(10, 11));
        assert!(!rule.doubles(13, 14));
    }

    #[test]
    fn rules_agree_on_even_length() {
        let s = "4532015112830366";
        assert_eq!(
            luhn_sum(s, DoublingRule::EvenIndexFromStart),
            luhn_sum(s, DoublingRule::EvenCounterFromEnd)
        );
        assert_eq!(luhn_sum(s, DoublingRule::EvenIndexFromStart), Some(50));
    }

    #[test]
    fn rules_differ_on_odd_length() {
        // textbook Luhn sample number
        let s = "79927398713";
        assert!(compute_and_compare(s, 10, 0, DoublingRule::EvenCounterFromEnd));
        assert!(!compute_and_compare(s, 10, 0, DoublingRule::EvenIndexFromStart));
    }

    #[test]
    fn siret_sum() {
        assert_eq!(
            luhn_sum("73282932000074", DoublingRule::EvenCounterFromEnd),
            Some(50)
        );
    }

    #[test]
    fn non_digits_have_no_sum() {
        assert_eq!(luhn_sum("", DoublingRule::EvenCounterFromEnd), None);
        assert_eq!(luhn_sum("+123", DoublingRule::EvenCounterFromEnd), None);
        assert_eq!(luhn_sum("12 3", DoublingRule::EvenIndexFromStart), None);
        assert_eq!(luhn_sum("١٢٣", DoublingRule::EvenIndexFromStart), None);
    }

    #[test]
    fn first_non_digit_reports_char_position() {
        assert_eq!(first_non_digit("1234567A901234"), Some((7, 'A')));
        assert_eq!(first_non_digit("-1"), Some((0, '-')));
        assert_eq!(first_non_digit("0123"), None);
    }

    #[test]
    fn zero_modulus_never_matches() {
        assert!(!compute_and_compare("0", 0, 0, DoublingRule::EvenCounterFromEnd));
    }

    #[test]
    fn non_zero_remainder_target() {
        // sum of 73282932000075 under rule (b) is 51
        assert!(compute_and_compare(
            "73282932000075",
            10,
            1,
            DoublingRule::EvenCounterFromEnd
        ));
    }

    #[test]
    fn check_digit_textbook() {
        assert_eq!(check_digit("7992739871", DoublingRule::EvenCounterFromEnd), Some(3));
        assert_eq!(check_digit("7328293200007", DoublingRule::EvenCounterFromEnd), Some(4));
    }

    #[test]
    fn check_digit_even_index_rule() {
        assert_eq!(check_digit("453201511283036", DoublingRule::EvenIndexFromStart), Some(6));
    }

    #[test]
    fn check_digit_rejects_bad_payload() {
        assert_eq!(check_digit("", DoublingRule::EvenCounterFromEnd), None);
        assert_eq!(check_digit("12a", DoublingRule::EvenCounterFromEnd), None);
    }

    #[test]
    fn rule_serde_names() {
        let json = serde_json::to_string(&DoublingRule::EvenCounterFromEnd).unwrap();
        assert_eq!(json, "\"even_counter_from_end\"");
    }
}
