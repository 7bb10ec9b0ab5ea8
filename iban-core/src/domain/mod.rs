//! Core domain types
//!
//! Pure data structures with validation logic - no I/O or external
//! dependencies.

pub mod iban;
pub mod result;

pub use iban::{normalize_iban, Iban, IbanValue, DEFAULT_GROUP_SEPARATOR};
