use crate::core::fields::{encode_amount, encode_text, encode_timestamp};
use crate::core::{FieldTag, QrError, QrFields, SchemaVersion, compute_stamp};

use super::TlvField;

/// Encode a logical record into raw TLV bytes.
///
/// Tags 1-5 are emitted in fixed order. Under [`SchemaVersion::Extended`]
/// the tag-6 stamp follows, taken from `fields.stamp` or computed on the
/// fly when absent. Under [`SchemaVersion::Basic`] an attached stamp is not
/// emitted.
pub fn encode_record(fields: &QrFields, schema: SchemaVersion) -> Result<Vec<u8>, QrError> {
    let mut buf = Vec::new();

    push_field(
        &mut buf,
        FieldTag::SellerName,
        encode_text(FieldTag::SellerName, &fields.seller_name)?,
    )?;
    push_field(
        &mut buf,
        FieldTag::VatNumber,
        encode_text(FieldTag::VatNumber, &fields.vat_number)?,
    )?;
    push_field(
        &mut buf,
        FieldTag::Timestamp,
        encode_timestamp(&fields.timestamp),
    )?;
    push_field(
        &mut buf,
        FieldTag::TotalAmount,
        encode_amount(fields.total_amount)?,
    )?;
    push_field(
        &mut buf,
        FieldTag::VatAmount,
        encode_amount(fields.vat_amount)?,
    )?;

    if schema == SchemaVersion::Extended {
        let stamp = fields.stamp.unwrap_or_else(|| compute_stamp(fields));
        push_field(&mut buf, FieldTag::Stamp, stamp.to_vec())?;
    }

    Ok(buf)
}

fn push_field(buf: &mut Vec<u8>, tag: FieldTag, value: Vec<u8>) -> Result<(), QrError> {
    TlvField::new(tag.code(), value)?.write_to(buf);
    Ok(())
}
