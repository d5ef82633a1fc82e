//! Base64 payload transport.
//!
//! The transport string, standard Base64 of the raw TLV record, is the
//! literal payload a QR symbol carries. The regulation caps it at 700
//! characters, a ceiling defined on the Base64 text and independent of the
//! per-field 255-byte limit.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::core::{QrError, QrFields, SchemaVersion};
use crate::tlv;

/// Regulatory ceiling on the transport string, in characters.
pub const MAX_TRANSPORT_CHARS: usize = 700;

/// Base64-encode raw record bytes into a transport string.
pub fn to_transport(record: &[u8]) -> Result<String, QrError> {
    let payload = STANDARD.encode(record);
    if payload.len() > MAX_TRANSPORT_CHARS {
        return Err(QrError::PayloadTooLong(payload.len()));
    }
    Ok(payload)
}

/// Decode a transport string back into raw record bytes.
///
/// Oversized payloads are rejected before any Base64 work.
pub fn from_transport(payload: &str) -> Result<Vec<u8>, QrError> {
    if payload.len() > MAX_TRANSPORT_CHARS {
        return Err(QrError::PayloadTooLong(payload.len()));
    }
    STANDARD
        .decode(payload)
        .map_err(|e| QrError::InvalidBase64(e.to_string()))
}

/// Full generation pipeline: logical record → TLV bytes → transport string.
pub fn encode_fields(fields: &QrFields, schema: SchemaVersion) -> Result<String, QrError> {
    to_transport(&tlv::encode_record(fields, schema)?)
}

/// Full decode pipeline: transport string → TLV bytes → logical record.
pub fn decode_fields(payload: &str, schema: SchemaVersion) -> Result<QrFields, QrError> {
    tlv::decode_record(&from_transport(payload)?, schema)
}
