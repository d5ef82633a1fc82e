//! Core value types, error taxonomy, and the per-field codec.
//!
//! This module provides the foundational pieces of the ZATCA QR payload:
//! the logical record ([`QrFields`]), the schema selector, the scalar
//! field codec, and the non-authoritative stamp digest.

mod error;
pub mod fields;
mod stamp;
mod types;

pub use error::*;
pub use stamp::compute_stamp;
pub use types::*;
