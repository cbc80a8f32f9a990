use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use casual_http::{
    BufferType, CasualContentType, ServiceBuffer, UnsupportedTypeError, to_content_type,
};

/// The HTTP answer to one service call. Holds nothing but what goes on the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub body: Option<Bytes>,
    pub content_type: &'static str,
}

impl GatewayResponse {
    pub fn with_payload(status: StatusCode, buffer_type: BufferType, body: Bytes) -> Self {
        Self {
            status,
            body: Some(body),
            content_type: to_content_type(buffer_type),
        }
    }

    /// A response with the payload of `buffer`, typed after the buffer's name.
    pub fn from_buffer(
        status: StatusCode,
        buffer: ServiceBuffer,
    ) -> Result<Self, UnsupportedTypeError> {
        let buffer_type = buffer.buffer_type()?;
        Ok(Self::with_payload(status, buffer_type, buffer.into_bytes()))
    }

    /// A response without payload, marked with the null content type.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            body: None,
            content_type: CasualContentType::NULL,
        }
    }
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body.unwrap_or_default(),
        )
            .into_response()
    }
}
