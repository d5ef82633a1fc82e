use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::stamp::compute_stamp;

/// Length of the tag-6 stamp value in bytes.
pub const STAMP_LEN: usize = 32;

/// TLV tag assignments mandated by the ZATCA QR specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldTag {
    /// Tag 1 — seller's registered trade name (UTF-8 text).
    SellerName,
    /// Tag 2 — seller's VAT registration number (digits, carried as text).
    VatNumber,
    /// Tag 3 — invoice issue timestamp.
    Timestamp,
    /// Tag 4 — invoice grand total including VAT.
    TotalAmount,
    /// Tag 5 — total VAT amount.
    VatAmount,
    /// Tag 6 — non-authoritative stamp digest (extended schema only).
    Stamp,
}

impl FieldTag {
    /// Wire tag byte.
    pub fn code(&self) -> u8 {
        match self {
            Self::SellerName => 1,
            Self::VatNumber => 2,
            Self::Timestamp => 3,
            Self::TotalAmount => 4,
            Self::VatAmount => 5,
            Self::Stamp => 6,
        }
    }

    /// Parse from a wire tag byte.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::SellerName),
            2 => Some(Self::VatNumber),
            3 => Some(Self::Timestamp),
            4 => Some(Self::TotalAmount),
            5 => Some(Self::VatAmount),
            6 => Some(Self::Stamp),
            _ => None,
        }
    }

    /// Field name as used in error messages and the inspection summary.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SellerName => "seller_name",
            Self::VatNumber => "vat_number",
            Self::Timestamp => "timestamp",
            Self::TotalAmount => "total_amount",
            Self::VatAmount => "vat_amount",
            Self::Stamp => "stamp",
        }
    }
}

/// QR record schema variant.
///
/// The two variants are incompatible on the wire: `Basic` carries the five
/// mandatory fields only, `Extended` appends the tag-6 stamp digest. The
/// caller always names the schema explicitly; it is never inferred from
/// input shape. The `Basic` decoder is strict and rejects a tag-6 field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// Five mandatory fields (tags 1-5).
    Basic,
    /// Tags 1-5 plus the 32-byte stamp digest (tag 6).
    Extended,
}

/// The logical QR record: the facts a third-party scanner recovers.
///
/// An immutable value object, constructed fresh per encode/decode call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrFields {
    /// Seller's registered trade name. Non-empty; at most 255 UTF-8 bytes.
    pub seller_name: String,
    /// Seller's VAT registration number. Non-empty; at most 255 bytes.
    pub vat_number: String,
    /// Invoice issue timestamp. The canonical wire form carries no timezone.
    pub timestamp: NaiveDateTime,
    /// Invoice grand total including VAT. Non-negative, two fraction digits.
    pub total_amount: Decimal,
    /// Total VAT amount. Non-negative, two fraction digits.
    pub vat_amount: Decimal,
    /// Stamp digest, present only under [`SchemaVersion::Extended`].
    pub stamp: Option<[u8; STAMP_LEN]>,
}

/// Seller facts supplied by the invoicing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Registered trade name.
    pub name: String,
    /// VAT registration number.
    pub vat_number: String,
}

impl Seller {
    pub fn new(name: impl Into<String>, vat_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vat_number: vat_number.into(),
        }
    }
}

/// Invoice totals supplied by the invoicing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Issue timestamp.
    pub issued_at: NaiveDateTime,
    /// Grand total including VAT.
    pub gross_total: Decimal,
    /// Total VAT amount.
    pub vat_total: Decimal,
}

impl InvoiceTotals {
    pub fn new(issued_at: NaiveDateTime, gross_total: Decimal, vat_total: Decimal) -> Self {
        Self {
            issued_at,
            gross_total,
            vat_total,
        }
    }
}

impl QrFields {
    /// Assemble the QR record input from seller and invoice facts.
    ///
    /// Under [`SchemaVersion::Extended`] the stamp digest is computed here;
    /// under [`SchemaVersion::Basic`] no stamp is attached.
    pub fn from_invoice(seller: &Seller, totals: &InvoiceTotals, schema: SchemaVersion) -> Self {
        let mut fields = Self {
            seller_name: seller.name.clone(),
            vat_number: seller.vat_number.clone(),
            timestamp: totals.issued_at,
            total_amount: totals.gross_total,
            vat_amount: totals.vat_total,
            stamp: None,
        };
        if schema == SchemaVersion::Extended {
            fields.stamp = Some(compute_stamp(&fields));
        }
        fields
    }
}

/// Operator-readable field summary, one `name: value` line per field.
impl fmt::Display for QrFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seller_name:  {}", self.seller_name)?;
        writeln!(f, "vat_number:   {}", self.vat_number)?;
        writeln!(
            f,
            "timestamp:    {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "total_amount: {:.2}", self.total_amount)?;
        writeln!(f, "vat_amount:   {:.2}", self.vat_amount)?;
        match &self.stamp {
            Some(_) => write!(f, "stamp:        present ({STAMP_LEN} bytes)"),
            None => write!(f, "stamp:        absent"),
        }
    }
}
