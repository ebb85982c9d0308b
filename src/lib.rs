//! # siret-luhn
//!
//! Luhn-family checksums for numeric identifiers, with the French business
//! identifiers built on top: SIRET, SIREN and the TVA number derived from them.
//!
//! Every check is a pure function over a string. Malformed input is a
//! negative result, never a panic. The `check_*` and `generate_*` functions
//! answer with a flag (and a string); the `validate_*` and `derive_*`
//! functions return a [`Result`] carrying the reason for rejection.
//!
//! ## Quick Start
//!
//! ```rust
//! use siret_luhn::core::*;
//! use siret_luhn::siret::check_siret;
//! use siret_luhn::tva::generate_tva_number;
//!
//! // Payment card, 13-19 digits
//! assert!(check_generic("4532015112830366", 10, 0, 13, 19));
//!
//! // SIRET with display spacing
//! assert_eq!(check_siret("732 829 320 00074"), (true, "73282932000074".to_string()));
//!
//! // TVA number derived from the SIREN part
//! assert_eq!(generate_tva_number("fr", "73282932000074"), (true, "FR19732829320".to_string()));
//! ```
//!
//! ## Diagnostics
//!
//! Rejections and key searches emit `tracing` events at `debug` and `trace`
//! level. Nothing is printed unless the application installs a subscriber.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Checksum engine, [`LuhnParams`], generic checks |
//! | `siret` (default) | SIRET / SIREN validation |
//! | `tva` (default) | TVA number derivation |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "siret")]
pub mod siret;

#[cfg(feature = "tva")]
pub mod tva;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
