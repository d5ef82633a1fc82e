use thiserror::Error;

/// Errors that can occur while encoding, decoding, or validating a QR
/// payload.
///
/// Every variant is a caller-input or data-integrity error; there is no
/// transient failure class in this subsystem, so nothing is ever retried.
/// [`QrError::RenderFailed`] is the one variant callers are expected to
/// treat as non-fatal: the transport string remains usable without an
/// image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QrError {
    /// A field's encoded value exceeds the one-byte length limit.
    #[error("value too long for tag {tag}: {len} bytes (max 255)")]
    FieldTooLong { tag: u8, len: usize },

    /// A text field's value is not valid UTF-8.
    #[error("value for tag {tag} is not valid UTF-8")]
    InvalidTextEncoding { tag: u8 },

    /// A timestamp value is neither canonical nor ISO-8601.
    #[error("invalid timestamp format: {0:?}")]
    InvalidTimestampFormat(String),

    /// An amount is negative or not a well-formed decimal.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// The stamp digest is not exactly 32 bytes.
    #[error("stamp must be exactly 32 bytes, got {0}")]
    InvalidHashLength(usize),

    /// The record ends before a declared field is complete.
    #[error("truncated record at offset {0}")]
    TruncatedRecord(usize),

    /// A tag byte outside the assigned range 1-6.
    #[error("unknown tag {0}")]
    UnknownTag(u8),

    /// The same tag appears more than once in a record.
    #[error("duplicate tag {0}")]
    DuplicateTag(u8),

    /// One of the five mandatory fields is absent (or empty).
    #[error("missing mandatory field: {0}")]
    MissingMandatoryField(&'static str),

    /// A tag-6 stamp in a record decoded under the basic schema.
    #[error("unexpected field: tag {0}")]
    UnexpectedField(u8),

    /// The Base64 transport string exceeds the 700-character ceiling.
    #[error("payload is {0} characters (max 700)")]
    PayloadTooLong(usize),

    /// The transport string is not valid standard Base64.
    #[error("invalid Base64 payload: {0}")]
    InvalidBase64(String),

    /// The QR symbol or PNG encoder rejected the payload.
    #[error("QR rendering failed: {0}")]
    RenderFailed(String),
}
