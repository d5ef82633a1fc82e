//! Compliance gate and operator diagnostics over a transport string.
//!
//! Both operations run the same pipeline (transport decode, TLV decode,
//! mandatory-field checks). [`validate`] discards the structured result;
//! [`inspect`] hands it back, and [`crate::core::QrFields`] renders as a
//! human-readable field summary via `Display`.

use crate::core::{QrError, QrFields, SchemaVersion};
use crate::transport;

/// Check a transport string for compliance, discarding the decoded record.
pub fn validate(payload: &str, schema: SchemaVersion) -> Result<(), QrError> {
    transport::decode_fields(payload, schema).map(|_| ())
}

/// Decode a transport string into its structured fields for diagnostics.
pub fn inspect(payload: &str, schema: SchemaVersion) -> Result<QrFields, QrError> {
    transport::decode_fields(payload, schema)
}
