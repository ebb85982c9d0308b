use thiserror::Error;
use tracing::{debug, trace};

use super::country::Country;
use crate::core::{LuhnError, LuhnParams, validate_luhn};
use crate::siret::Siret;

/// Highest TVA key tried; the key is a 2-digit field.
pub const TVA_KEY_MAX: u8 = 99;

/// Why a TVA number could not be derived.
///
/// The `Display` strings are the diagnostics returned by
/// [`generate_tva_number`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TvaError {
    /// The SIRET failed its own Luhn check.
    #[error("invalid siret")]
    InvalidSiret(#[source] LuhnError),

    /// The country is not one TVA numbers can be derived for.
    #[error("country not valid")]
    UnsupportedCountry(String),

    /// No key in `01..=99` satisfies the checksum.
    #[error("not found the tva luhn key")]
    KeyNotFound,
}

/// Derive the TVA number of a validated establishment.
///
/// Tries keys `01` to `99` in order and returns the country prefix followed
/// by the first `key + SIREN` that passes textbook Luhn.
pub fn tva_number_for(siret: &Siret, country: Country) -> Result<String, TvaError> {
    search_key(siret.siren(), country)
}

fn search_key(siren: &str, country: Country) -> Result<String, TvaError> {
    for key in 1..=TVA_KEY_MAX {
        let candidate = format!("{key:02}{siren}");
        match validate_luhn(&candidate, &LuhnParams::TVA_KEYED) {
            Ok(keyed) => {
                debug!(siren, key, "tva key found");
                return Ok(format!("{}{keyed}", country.code()));
            }
            Err(err) => trace!(%candidate, %err, "tva key rejected"),
        }
    }
    debug!(siren, "no tva key in range");
    Err(TvaError::KeyNotFound)
}

/// Derive a TVA number from a country code or name and a raw SIRET.
///
/// ```
/// use siret_luhn::tva::{TvaError, derive_tva_number};
///
/// assert_eq!(derive_tva_number("fr", "73282932000074").unwrap(), "FR19732829320");
/// assert_eq!(derive_tva_number("DE", "73282932000074"), Err(TvaError::UnsupportedCountry("DE".into())));
/// ```
pub fn derive_tva_number(country: &str, siret: &str) -> Result<String, TvaError> {
    let country =
        Country::parse(country).ok_or_else(|| TvaError::UnsupportedCountry(country.to_string()))?;
    let siret = Siret::parse(siret).map_err(TvaError::InvalidSiret)?;
    tva_number_for(&siret, country)
}

/// Derive a TVA number, reporting the outcome as a flag and a string.
///
/// On success the string is the TVA number (e.g. `FR19732829320`); on
/// failure it is one of `"country not valid"`, `"invalid siret"` or
/// `"not found the tva luhn key"`.
pub fn generate_tva_number(country: &str, siret: &str) -> (bool, String) {
    match derive_tva_number(country, siret) {
        Ok(tva) => (true, tva),
        Err(err) => (false, err.to_string()),
    }
}
