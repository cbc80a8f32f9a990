use crate::buffer::{BufferType, UnsupportedTypeError};

/// HTTP content types understood by the gateway.
pub struct CasualContentType;

impl CasualContentType {
    pub const X_OCTET: &'static str = "application/casual-x-octet";
    pub const JSON: &'static str = "application/json";
    pub const FIELD: &'static str = "application/casual-field";
    pub const STRING: &'static str = "application/casual-string";

    /// Sentinel used whenever a response carries no typed payload.
    pub const NULL: &'static str = "application/casual-null";
}

/// Maps a buffer type to the content type that represents it over HTTP.
pub const fn to_content_type(buffer_type: BufferType) -> &'static str {
    match buffer_type {
        BufferType::Json => CasualContentType::JSON,
        BufferType::CString => CasualContentType::STRING,
        BufferType::Fielded => CasualContentType::FIELD,
        BufferType::XOctet => CasualContentType::X_OCTET,
    }
}

/// Maps a request content type back to its buffer type.
///
/// Media type parameters (`; charset=utf-8`) are ignored and the comparison
/// is case-insensitive, as media types are. Anything else fails; there is no
/// fallback type.
pub fn to_buffer_type(content_type: &str) -> Result<BufferType, UnsupportedTypeError> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();

    BufferType::ALL
        .into_iter()
        .find(|t| to_content_type(*t).eq_ignore_ascii_case(essence))
        .ok_or_else(|| UnsupportedTypeError(content_type.to_owned()))
}
