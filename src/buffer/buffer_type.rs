use super::{BufferError, CasualBuffer, UnsupportedTypeError};
use bytes::Bytes;
use std::fmt;

/// The payload kinds the gateway understands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferType {
    Json,
    Fielded,
    XOctet,
    CString,
}

impl BufferType {
    pub const ALL: [BufferType; 4] = [
        BufferType::Json,
        BufferType::Fielded,
        BufferType::XOctet,
        BufferType::CString,
    ];

    /// Canonical name carried inside the RPC message.
    pub const fn name(self) -> &'static str {
        match self {
            BufferType::Json => "X_OCTET/JSON",
            BufferType::Fielded => "FML32/",
            BufferType::XOctet => "X_OCTET/",
            BufferType::CString => "CSTRING/",
        }
    }

    /// Resolves a canonical buffer name back to its type.
    ///
    /// An unknown name is a fatal local error: the reply cannot be mapped to a
    /// content type and must not be retried.
    pub fn unmarshall(name: &str) -> Result<BufferType, UnsupportedTypeError> {
        BufferType::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| UnsupportedTypeError(name.to_owned()))
    }

    /// Wraps raw request bytes into the typed buffer for this kind.
    pub fn wrap(self, data: Bytes) -> Result<CasualBuffer, BufferError> {
        match self {
            BufferType::XOctet => Ok(CasualBuffer::octet(data)),
            BufferType::Json => CasualBuffer::json(data),
            BufferType::Fielded => CasualBuffer::fielded(data),
            BufferType::CString => CasualBuffer::cstring(data),
        }
    }
}

impl fmt::Display for BufferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
