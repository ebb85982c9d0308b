//! French TVA (intra-community VAT) number derivation from a SIRET.
//!
//! The TVA number is the country prefix, a 2-digit key and the SIREN. The
//! key is found by trying `01` to `99` until `key + SIREN` passes Luhn.
//!
//! # Example
//!
//! ```
//! use siret_luhn::tva::*;
//!
//! let (ok, tva) = generate_tva_number("France", "732 829 320 00074");
//! assert!(ok);
//! assert_eq!(tva, "FR19732829320");
//! ```

mod country;
mod generate;

pub use country::Country;
pub use generate::{TVA_KEY_MAX, TvaError, derive_tva_number, generate_tva_number, tva_number_for};
