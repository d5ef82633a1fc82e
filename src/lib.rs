//! # fatoora
//!
//! ZATCA-compliant e-invoicing QR codes: TLV record encoding, Base64
//! transport, validation/inspection, and optional QR raster rendering.
//!
//! The QR payload mandated by the ZATCA e-invoicing regulation is a
//! Tag-Length-Value record of invoice facts, Base64-encoded and embedded in
//! a scannable symbol. All monetary values use [`rust_decimal::Decimal`] —
//! never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fatoora::core::*;
//! use fatoora::{inspect, transport};
//! use rust_decimal_macros::dec;
//!
//! let seller = Seller::new("Acme Trading Co.", "300000000000003");
//! let totals = InvoiceTotals::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 0).unwrap(),
//!     dec!(115.00),
//!     dec!(15.00),
//! );
//!
//! let fields = QrFields::from_invoice(&seller, &totals, SchemaVersion::Basic);
//! let payload = transport::encode_fields(&fields, SchemaVersion::Basic).unwrap();
//!
//! assert!(payload.len() <= transport::MAX_TRANSPORT_CHARS);
//! assert!(inspect::validate(&payload, SchemaVersion::Basic).is_ok());
//! assert_eq!(inspect::inspect(&payload, SchemaVersion::Basic).unwrap(), fields);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Field/TLV codecs, Base64 transport, validation |
//! | `render` | QR symbol rasterization to PNG |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod tlv;

#[cfg(feature = "core")]
pub mod transport;

#[cfg(feature = "core")]
pub mod inspect;

#[cfg(feature = "render")]
pub mod render;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
