use super::{BufferError, BufferType, ServiceBuffer, decode_fielded};
use bytes::Bytes;

/// A request buffer built from raw HTTP body bytes.
///
/// Each variant owns the validated bytes for its kind. Constructing one goes
/// through [`BufferType::wrap`], which is the only place a content type picks
/// its wrapping strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CasualBuffer {
    Octet(Bytes),
    Json(Bytes),
    Fielded(Bytes),
    CString(Bytes),
}

impl CasualBuffer {
    pub fn octet(data: Bytes) -> Self {
        CasualBuffer::Octet(data)
    }

    pub fn json(data: Bytes) -> Result<Self, BufferError> {
        std::str::from_utf8(&data).map_err(|e| BufferError::InvalidJson(e.to_string()))?;
        Ok(CasualBuffer::Json(data))
    }

    /// Accepts a single trailing terminator, rejects any NUL before it.
    pub fn cstring(data: Bytes) -> Result<Self, BufferError> {
        let content = match data.last() {
            Some(0) => &data[..data.len() - 1],
            _ => &data[..],
        };
        if let Some(offset) = content.iter().position(|b| *b == 0) {
            return Err(BufferError::InteriorNul(offset));
        }
        Ok(CasualBuffer::CString(data))
    }

    pub fn fielded(data: Bytes) -> Result<Self, BufferError> {
        decode_fielded(data.clone())?;
        Ok(CasualBuffer::Fielded(data))
    }

    pub fn buffer_type(&self) -> BufferType {
        match self {
            CasualBuffer::Octet(_) => BufferType::XOctet,
            CasualBuffer::Json(_) => BufferType::Json,
            CasualBuffer::Fielded(_) => BufferType::Fielded,
            CasualBuffer::CString(_) => BufferType::CString,
        }
    }

    pub fn bytes(&self) -> &Bytes {
        match self {
            CasualBuffer::Octet(b)
            | CasualBuffer::Json(b)
            | CasualBuffer::Fielded(b)
            | CasualBuffer::CString(b) => b,
        }
    }

    pub fn into_service_buffer(self) -> ServiceBuffer {
        let buffer_type = self.buffer_type();
        let bytes = match self {
            CasualBuffer::Octet(b)
            | CasualBuffer::Json(b)
            | CasualBuffer::Fielded(b)
            | CasualBuffer::CString(b) => b,
        };
        ServiceBuffer::of(buffer_type, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cstring_tolerates_one_trailing_nul() {
        assert!(CasualBuffer::cstring(Bytes::from_static(b"hello\0")).is_ok());
        assert!(CasualBuffer::cstring(Bytes::from_static(b"hello")).is_ok());
        assert_eq!(
            CasualBuffer::cstring(Bytes::from_static(b"he\0llo")),
            Err(BufferError::InteriorNul(2))
        );
        assert_eq!(
            CasualBuffer::cstring(Bytes::from_static(b"hello\0\0")),
            Err(BufferError::InteriorNul(5))
        );
    }

    #[test]
    fn json_requires_utf8() {
        assert!(CasualBuffer::json(Bytes::from_static(br#"{"x":1}"#)).is_ok());
        assert!(matches!(
            CasualBuffer::json(Bytes::from_static(&[0xff, 0xfe])),
            Err(BufferError::InvalidJson(_))
        ));
    }

    #[test]
    fn octet_keeps_anything() {
        let raw = Bytes::from_static(&[0, 159, 146, 150]);
        let buffer = BufferType::XOctet.wrap(raw.clone()).unwrap();
        assert_eq!(buffer.bytes(), &raw);
        assert_eq!(buffer.buffer_type(), BufferType::XOctet);
    }
}
