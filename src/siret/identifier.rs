use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{LuhnError, LuhnParams, validate_luhn};

/// Number of leading SIRET digits that form the SIREN.
pub const SIREN_LEN: usize = 9;

/// A validated 14-digit SIRET establishment identifier.
///
/// 9 digits of SIREN, then a 5-digit NIC (establishment number plus the
/// Luhn key). Always stored without spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Siret(String);

impl Siret {
    /// Normalize and validate a SIRET.
    pub fn parse(value: &str) -> Result<Self, LuhnError> {
        validate_luhn(value, &LuhnParams::SIRET).map(Self)
    }

    /// The normalized 14 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 9-digit SIREN the establishment belongs to.
    pub fn siren(&self) -> &str {
        &self.0[..SIREN_LEN]
    }

    /// The 5-digit NIC (Numéro Interne de Classement).
    pub fn nic(&self) -> &str {
        &self.0[SIREN_LEN..]
    }
}

impl fmt::Display for Siret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Siret {
    type Err = LuhnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Siret {
    type Error = LuhnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Siret> for String {
    fn from(siret: Siret) -> Self {
        siret.0
    }
}

impl AsRef<str> for Siret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate a SIRET, returning the typed identifier or why it was rejected.
pub fn validate_siret(value: &str) -> Result<Siret, LuhnError> {
    Siret::parse(value)
}

/// Check a SIRET.
///
/// Surrounding whitespace and internal spaces are removed first. Returns
/// `(true, normalized)` on success and `(false, "")` otherwise.
///
/// ```
/// use siret_luhn::siret::check_siret;
///
/// assert_eq!(check_siret("732 829 320 00074"), (true, "73282932000074".into()));
/// assert_eq!(check_siret("123"), (false, String::new()));
/// ```
pub fn check_siret(value: &str) -> (bool, String) {
    match validate_siret(value) {
        Ok(siret) => (true, siret.into()),
        Err(_) => (false, String::new()),
    }
}

/// Check a 9-digit SIREN, with the same normalization as [`check_siret`].
pub fn check_siren(value: &str) -> (bool, String) {
    match validate_luhn(value, &LuhnParams::SIREN) {
        Ok(siren) => (true, siren),
        Err(_) => (false, String::new()),
    }
}

/// First 9 characters of `siret`; shorter input is returned whole.
pub fn siren_from_siret(siret: &str) -> String {
    siret.chars().take(SIREN_LEN).collect()
}
