//! SIRET establishment identifiers and SIREN registration numbers.
//!
//! Both are validated with textbook Luhn (mod 10) after trimming and
//! removing internal spaces.
//!
//! # Example
//!
//! ```
//! use siret_luhn::siret::*;
//!
//! let siret = validate_siret("356 000 000 00048").unwrap();
//! assert_eq!(siret.siren(), "356000000");
//! assert!(check_siren(siret.siren()).0);
//! ```

mod identifier;

pub use identifier::{
    SIREN_LEN, Siret, check_siren, check_siret, siren_from_siret, validate_siret,
};
