//! Tests for the TLV record codec.

use chrono::{NaiveDate, NaiveDateTime};
use fatoora::core::*;
use fatoora::tlv;
use rust_decimal_macros::dec;

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn sample_fields() -> QrFields {
    QrFields {
        seller_name: "Acme Trading Co.".into(),
        vat_number: "300000000000003".into(),
        timestamp: ts(2024, 1, 15, 10, 30, 0),
        total_amount: dec!(115.00),
        vat_amount: dec!(15.00),
        stamp: None,
    }
}

/// Raw TLV segment: tag, one-byte length, value.
fn seg(tag: u8, value: &[u8]) -> Vec<u8> {
    let mut v = vec![tag, value.len() as u8];
    v.extend_from_slice(value);
    v
}

fn sample_record() -> Vec<u8> {
    [
        seg(1, b"Acme Trading Co."),
        seg(2, b"300000000000003"),
        seg(3, b"2024-01-15 10:30:00"),
        seg(4, b"115.00"),
        seg(5, b"15.00"),
    ]
    .concat()
}

// --- Encoding ---

#[test]
fn basic_record_wire_layout() {
    let record = tlv::encode_record(&sample_fields(), SchemaVersion::Basic).unwrap();
    assert_eq!(record, sample_record());
}

#[test]
fn extended_record_appends_stamp() {
    let fields = sample_fields();
    let record = tlv::encode_record(&fields, SchemaVersion::Extended).unwrap();
    let basic = tlv::encode_record(&fields, SchemaVersion::Basic).unwrap();

    assert_eq!(&record[..basic.len()], &basic[..]);
    assert_eq!(record.len(), basic.len() + 2 + 32);
    assert_eq!(record[basic.len()], 6);
    assert_eq!(record[basic.len() + 1], 32);
    assert_eq!(&record[basic.len() + 2..], &compute_stamp(&fields)[..]);
}

#[test]
fn extended_record_uses_attached_stamp() {
    let mut fields = sample_fields();
    fields.stamp = Some([0xAB; 32]);
    let record = tlv::encode_record(&fields, SchemaVersion::Extended).unwrap();
    assert_eq!(&record[record.len() - 32..], &[0xAB; 32][..]);
}

#[test]
fn basic_record_ignores_attached_stamp() {
    let mut fields = sample_fields();
    fields.stamp = Some([0xAB; 32]);
    let record = tlv::encode_record(&fields, SchemaVersion::Basic).unwrap();
    assert_eq!(record, sample_record());
}

#[test]
fn seller_name_at_255_bytes_encodes() {
    let mut fields = sample_fields();
    fields.seller_name = "x".repeat(255);
    assert!(tlv::encode_record(&fields, SchemaVersion::Basic).is_ok());
}

#[test]
fn seller_name_at_256_bytes_fails() {
    let mut fields = sample_fields();
    fields.seller_name = "x".repeat(256);
    assert_eq!(
        tlv::encode_record(&fields, SchemaVersion::Basic),
        Err(QrError::FieldTooLong { tag: 1, len: 256 })
    );
}

#[test]
fn empty_seller_name_fails() {
    let mut fields = sample_fields();
    fields.seller_name.clear();
    assert_eq!(
        tlv::encode_record(&fields, SchemaVersion::Basic),
        Err(QrError::MissingMandatoryField("seller_name"))
    );
}

#[test]
fn negative_total_fails() {
    let mut fields = sample_fields();
    fields.total_amount = dec!(-115.00);
    assert!(matches!(
        tlv::encode_record(&fields, SchemaVersion::Basic),
        Err(QrError::InvalidAmount(_))
    ));
}

// --- Decoding ---

#[test]
fn roundtrip_basic() {
    let fields = sample_fields();
    let record = tlv::encode_record(&fields, SchemaVersion::Basic).unwrap();
    assert_eq!(
        tlv::decode_record(&record, SchemaVersion::Basic).unwrap(),
        fields
    );
}

#[test]
fn roundtrip_extended() {
    let fields = sample_fields();
    let record = tlv::encode_record(&fields, SchemaVersion::Extended).unwrap();
    let decoded = tlv::decode_record(&record, SchemaVersion::Extended).unwrap();

    assert_eq!(decoded.seller_name, fields.seller_name);
    assert_eq!(decoded.stamp, Some(compute_stamp(&fields)));
}

#[test]
fn unicode_seller_name_roundtrips_byte_exact() {
    let mut fields = sample_fields();
    fields.seller_name = "شركة المثال".into();
    let record = tlv::encode_record(&fields, SchemaVersion::Basic).unwrap();

    // The length prefix counts UTF-8 bytes, not characters.
    let name_bytes = "شركة المثال".as_bytes();
    assert_eq!(record[1] as usize, name_bytes.len());
    assert_eq!(&record[2..2 + name_bytes.len()], name_bytes);

    let decoded = tlv::decode_record(&record, SchemaVersion::Basic).unwrap();
    assert_eq!(decoded.seller_name, "شركة المثال");
}

#[test]
fn decoder_accepts_any_field_order() {
    let record = [
        seg(5, b"15.00"),
        seg(3, b"2024-01-15 10:30:00"),
        seg(1, b"Acme Trading Co."),
        seg(4, b"115.00"),
        seg(2, b"300000000000003"),
    ]
    .concat();
    assert_eq!(
        tlv::decode_record(&record, SchemaVersion::Basic).unwrap(),
        sample_fields()
    );
}

#[test]
fn duplicate_tag_rejected() {
    let mut record = sample_record();
    record.extend_from_slice(&seg(2, b"399999999999999"));
    assert_eq!(
        tlv::decode_record(&record, SchemaVersion::Basic),
        Err(QrError::DuplicateTag(2))
    );
}

#[test]
fn unknown_tag_rejected() {
    let mut record = sample_record();
    record.extend_from_slice(&seg(7, b"?"));
    assert_eq!(
        tlv::decode_record(&record, SchemaVersion::Basic),
        Err(QrError::UnknownTag(7))
    );
}

#[test]
fn truncating_any_valid_record_fails() {
    let record = tlv::encode_record(&sample_fields(), SchemaVersion::Basic).unwrap();
    assert!(matches!(
        tlv::decode_record(&record[..record.len() - 1], SchemaVersion::Basic),
        Err(QrError::TruncatedRecord(_))
    ));
}

#[test]
fn truncated_header_fails() {
    // A lone tag byte with no length byte.
    assert_eq!(
        tlv::scan_fields(&[1]),
        Err(QrError::TruncatedRecord(0))
    );
}

#[test]
fn value_shorter_than_declared_fails() {
    // Declares 10 value bytes but provides 3.
    let record = [1, 10, b'a', b'b', b'c'];
    assert_eq!(
        tlv::scan_fields(&record),
        Err(QrError::TruncatedRecord(2))
    );
}

#[test]
fn missing_vat_number_rejected() {
    let record = [
        seg(1, b"Acme Trading Co."),
        seg(3, b"2024-01-15 10:30:00"),
        seg(4, b"115.00"),
        seg(5, b"15.00"),
    ]
    .concat();
    assert_eq!(
        tlv::decode_record(&record, SchemaVersion::Basic),
        Err(QrError::MissingMandatoryField("vat_number"))
    );
}

#[test]
fn empty_record_reports_first_missing_field() {
    assert_eq!(
        tlv::decode_record(&[], SchemaVersion::Basic),
        Err(QrError::MissingMandatoryField("seller_name"))
    );
}

#[test]
fn empty_mandatory_value_counts_as_missing() {
    let record = [
        seg(1, b""),
        seg(2, b"300000000000003"),
        seg(3, b"2024-01-15 10:30:00"),
        seg(4, b"115.00"),
        seg(5, b"15.00"),
    ]
    .concat();
    assert_eq!(
        tlv::decode_record(&record, SchemaVersion::Basic),
        Err(QrError::MissingMandatoryField("seller_name"))
    );
}

#[test]
fn stamp_rejected_under_basic_schema() {
    let fields = sample_fields();
    let record = tlv::encode_record(&fields, SchemaVersion::Extended).unwrap();
    assert_eq!(
        tlv::decode_record(&record, SchemaVersion::Basic),
        Err(QrError::UnexpectedField(6))
    );
}

#[test]
fn stamp_optional_under_extended_schema() {
    // A five-field record still decodes under the extended schema.
    let decoded = tlv::decode_record(&sample_record(), SchemaVersion::Extended).unwrap();
    assert_eq!(decoded.stamp, None);
}

#[test]
fn stamp_with_wrong_length_rejected() {
    let mut record = sample_record();
    record.extend_from_slice(&seg(6, &[0u8; 31]));
    assert_eq!(
        tlv::decode_record(&record, SchemaVersion::Extended),
        Err(QrError::InvalidHashLength(31))
    );
}

#[test]
fn malformed_utf8_in_text_field_rejected() {
    let record = [
        seg(1, &[0xFF, 0xFE, 0xFD]),
        seg(2, b"300000000000003"),
        seg(3, b"2024-01-15 10:30:00"),
        seg(4, b"115.00"),
        seg(5, b"15.00"),
    ]
    .concat();
    assert_eq!(
        tlv::decode_record(&record, SchemaVersion::Basic),
        Err(QrError::InvalidTextEncoding { tag: 1 })
    );
}

#[test]
fn scan_preserves_raw_fields() {
    let record = sample_record();
    let scanned = tlv::scan_fields(&record).unwrap();
    assert_eq!(scanned.len(), 5);
    assert_eq!(
        scanned.iter().map(|f| f.tag()).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert_eq!(scanned[0].value(), b"Acme Trading Co.");
}
