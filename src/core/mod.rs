//! Luhn-family checksum engine, format parameters, and generic checks.
//!
//! Every identifier format in this crate is a [`LuhnParams`] value run
//! through the same weighted digit-sum in [`checksum`].

pub mod checksum;
mod error;
mod params;
mod validation;

pub use checksum::{DoublingRule, check_digit, compute_and_compare, is_ascii_digits, luhn_sum};
pub use error::*;
pub use params::*;
pub use validation::*;
