use thiserror::Error;

/// Raised when a buffer type name or content type is not part of the catalog.
///
/// This always points at a mismatch between the types exposed to HTTP clients
/// and the types known to the runtime; it is never coerced into a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported type: {0}")]
pub struct UnsupportedTypeError(pub String);

/// Raised when raw request bytes cannot be wrapped into a typed buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("json buffer is not valid utf-8: {0}")]
    InvalidJson(String),

    #[error("c-string buffer contains an interior NUL at offset {0}")]
    InteriorNul(usize),

    #[error(
        "fielded buffer truncated at offset {offset}: needed {needed} bytes, {available} available"
    )]
    FieldedTruncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("fielded buffer has negative length {length} for field {field_id}")]
    FieldedNegativeLength { field_id: i64, length: i64 },
}
