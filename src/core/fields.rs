//! Scalar field codec: single values to/from their canonical wire bytes.
//!
//! The TLV layer decides *where* fields sit in a record; this module decides
//! *what* their value bytes look like. Size limits operate on bytes, never
//! on character counts.

use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::QrError;
use super::types::{FieldTag, STAMP_LEN};

/// Maximum encoded size of a single field value (one-byte length prefix).
pub const MAX_FIELD_BYTES: usize = 255;

/// Canonical timestamp form: `YYYY-MM-DD HH:MM:SS`, no timezone.
const CANONICAL_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Legacy ISO-8601 form emitted by earlier encoders, accepted on decode.
const ISO8601_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Encode a text field as UTF-8 bytes.
///
/// An empty value is reported as the field being absent; a value past 255
/// UTF-8 bytes cannot fit behind a one-byte length prefix.
pub fn encode_text(tag: FieldTag, value: &str) -> Result<Vec<u8>, QrError> {
    if value.is_empty() {
        return Err(QrError::MissingMandatoryField(tag.name()));
    }
    if value.len() > MAX_FIELD_BYTES {
        return Err(QrError::FieldTooLong {
            tag: tag.code(),
            len: value.len(),
        });
    }
    Ok(value.as_bytes().to_vec())
}

/// Decode a text field from its value bytes.
pub fn decode_text(tag: FieldTag, bytes: &[u8]) -> Result<String, QrError> {
    if bytes.is_empty() {
        return Err(QrError::MissingMandatoryField(tag.name()));
    }
    let text = std::str::from_utf8(bytes)
        .map_err(|_| QrError::InvalidTextEncoding { tag: tag.code() })?;
    Ok(text.to_owned())
}

/// Encode a timestamp in the canonical space-separated form (19 ASCII bytes).
pub fn encode_timestamp(ts: &NaiveDateTime) -> Vec<u8> {
    ts.format(CANONICAL_TIMESTAMP).to_string().into_bytes()
}

/// Decode a timestamp, accepting the canonical form and the legacy
/// ISO-8601 `...Z` form.
pub fn decode_timestamp(bytes: &[u8]) -> Result<NaiveDateTime, QrError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| QrError::InvalidTimestampFormat(String::from_utf8_lossy(bytes).into_owned()))?;
    NaiveDateTime::parse_from_str(text, CANONICAL_TIMESTAMP)
        .or_else(|_| NaiveDateTime::parse_from_str(text, ISO8601_TIMESTAMP))
        .map_err(|_| QrError::InvalidTimestampFormat(text.to_owned()))
}

/// Encode a non-negative amount as ASCII with exactly two fraction digits.
pub fn encode_amount(amount: Decimal) -> Result<Vec<u8>, QrError> {
    if amount.is_sign_negative() {
        return Err(QrError::InvalidAmount(amount.to_string()));
    }
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Ok(format!("{rounded:.2}").into_bytes())
}

/// Decode an amount from its ASCII form. Negative values violate the record
/// invariant and are rejected alongside malformed text.
pub fn decode_amount(bytes: &[u8]) -> Result<Decimal, QrError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| QrError::InvalidAmount(String::from_utf8_lossy(bytes).into_owned()))?;
    let amount =
        Decimal::from_str(text).map_err(|_| QrError::InvalidAmount(text.to_owned()))?;
    if amount.is_sign_negative() {
        return Err(QrError::InvalidAmount(text.to_owned()));
    }
    Ok(amount)
}

/// Check a stamp value and return it as a fixed-size digest.
pub fn check_stamp(bytes: &[u8]) -> Result<[u8; STAMP_LEN], QrError> {
    <[u8; STAMP_LEN]>::try_from(bytes).map_err(|_| QrError::InvalidHashLength(bytes.len()))
}
