//! Non-authoritative stamp digest for the extended schema.
//!
//! This is a plain SHA-256 over a few formatted invoice facts. It is NOT a
//! digital signature and provides no integrity guarantee against a motivated
//! forger; it exists for interoperability with readers of the extended
//! record form.

use sha2::{Digest, Sha256};

use super::types::{QrFields, STAMP_LEN};

/// Compute the tag-6 stamp digest for a record.
///
/// The digest input is the `|`-joined seller name, VAT number, ISO-8601
/// timestamp, and the two amounts fixed to two fraction digits. This is the
/// recipe used by existing extended-schema writers, kept for
/// interoperability.
pub fn compute_stamp(fields: &QrFields) -> [u8; STAMP_LEN] {
    let input = format!(
        "{}|{}|{}|{:.2}|{:.2}",
        fields.seller_name,
        fields.vat_number,
        fields.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
        fields.total_amount.round_dp(2),
        fields.vat_amount.round_dp(2),
    );
    Sha256::digest(input.as_bytes()).into()
}
