use super::{BufferType, UnsupportedTypeError};
use bytes::Bytes;

/// A payload as it travels inside a call or reply message: the raw type name
/// plus the bytes.
///
/// The type name is kept verbatim so that a reply carrying a name outside the
/// catalog surfaces as an [`UnsupportedTypeError`] when it is unmarshalled,
/// rather than being silently accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBuffer {
    type_name: String,
    bytes: Bytes,
}

impl ServiceBuffer {
    pub fn of(buffer_type: BufferType, bytes: impl Into<Bytes>) -> Self {
        Self {
            type_name: buffer_type.name().to_owned(),
            bytes: bytes.into(),
        }
    }

    /// Builds a buffer from an arbitrary type name, e.g. one decoded off the wire.
    pub fn with_type_name(type_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            type_name: type_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn buffer_type(&self) -> Result<BufferType, UnsupportedTypeError> {
        BufferType::unmarshall(&self.type_name)
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
