use crate::core::fields::{check_stamp, decode_amount, decode_text, decode_timestamp};
use crate::core::{FieldTag, QrError, QrFields, SchemaVersion};

use super::TlvField;

/// Scan raw record bytes into their tag-length-value fields.
///
/// This is the low-level walk only: truncation is detected here, while tag
/// assignment, duplicates, and mandatory-field presence are judged by
/// [`decode_record`].
pub fn scan_fields(bytes: &[u8]) -> Result<Vec<TlvField>, QrError> {
    let mut out = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        if offset + 2 > bytes.len() {
            return Err(QrError::TruncatedRecord(offset));
        }
        let tag = bytes[offset];
        let len = bytes[offset + 1] as usize;
        offset += 2;

        if offset + len > bytes.len() {
            return Err(QrError::TruncatedRecord(offset));
        }
        // len came from one byte, so the 255 limit holds by construction.
        out.push(TlvField::new(tag, bytes[offset..offset + len].to_vec())?);
        offset += len;
    }

    Ok(out)
}

/// Decode raw TLV bytes into a logical record.
///
/// Fields may arrive in any order, but each tag at most once. Tags 1-5 must
/// all be present; tag 6 is accepted only under the extended schema and must
/// be exactly 32 bytes.
pub fn decode_record(bytes: &[u8], schema: SchemaVersion) -> Result<QrFields, QrError> {
    let mut seller_name = None;
    let mut vat_number = None;
    let mut timestamp = None;
    let mut total_amount = None;
    let mut vat_amount = None;
    let mut stamp = None;

    for field in scan_fields(bytes)? {
        let tag = FieldTag::from_code(field.tag()).ok_or(QrError::UnknownTag(field.tag()))?;
        match tag {
            FieldTag::SellerName => {
                reject_duplicate(&seller_name, tag)?;
                seller_name = Some(decode_text(tag, field.value())?);
            }
            FieldTag::VatNumber => {
                reject_duplicate(&vat_number, tag)?;
                vat_number = Some(decode_text(tag, field.value())?);
            }
            FieldTag::Timestamp => {
                reject_duplicate(&timestamp, tag)?;
                timestamp = Some(decode_timestamp(field.value())?);
            }
            FieldTag::TotalAmount => {
                reject_duplicate(&total_amount, tag)?;
                total_amount = Some(decode_amount(field.value())?);
            }
            FieldTag::VatAmount => {
                reject_duplicate(&vat_amount, tag)?;
                vat_amount = Some(decode_amount(field.value())?);
            }
            FieldTag::Stamp => {
                if schema == SchemaVersion::Basic {
                    return Err(QrError::UnexpectedField(tag.code()));
                }
                reject_duplicate(&stamp, tag)?;
                stamp = Some(check_stamp(field.value())?);
            }
        }
    }

    Ok(QrFields {
        seller_name: require(seller_name, FieldTag::SellerName)?,
        vat_number: require(vat_number, FieldTag::VatNumber)?,
        timestamp: require(timestamp, FieldTag::Timestamp)?,
        total_amount: require(total_amount, FieldTag::TotalAmount)?,
        vat_amount: require(vat_amount, FieldTag::VatAmount)?,
        stamp,
    })
}

fn reject_duplicate<T>(slot: &Option<T>, tag: FieldTag) -> Result<(), QrError> {
    if slot.is_some() {
        return Err(QrError::DuplicateTag(tag.code()));
    }
    Ok(())
}

fn require<T>(slot: Option<T>, tag: FieldTag) -> Result<T, QrError> {
    slot.ok_or(QrError::MissingMandatoryField(tag.name()))
}
