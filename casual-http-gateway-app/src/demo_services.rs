//! Services hosted by the standalone gateway, useful for trying the HTTP
//! surface without a casual domain behind it.

use bytes::Bytes;
use casual_http::{BufferType, ServiceBuffer, ServiceCallRequestMessage, buffer::decode_fielded};
use casual_service_endpoint::{
    LocalServiceEndpointInterface, LocalServiceResult,
    error::{EndpointError, ServiceFailure},
};

pub const ECHO: &str = "casual.example.echo";
pub const UPPERCASE: &str = "casual.example.uppercase";
pub const FIELD_IDS: &str = "casual.example.field-ids";

pub fn register_demo_services<E>(endpoint: &E) -> Result<(), EndpointError>
where
    E: LocalServiceEndpointInterface,
{
    endpoint.register(ECHO, |request| async move { echo(request) })?;
    endpoint.register(UPPERCASE, |request| async move { uppercase(request) })?;
    endpoint.register(FIELD_IDS, |request| async move { field_ids(request) })?;
    tracing::info!("registered demo services {}, {}, {}", ECHO, UPPERCASE, FIELD_IDS);
    Ok(())
}

/// Answers with the request buffer as-is.
fn echo(request: ServiceCallRequestMessage) -> LocalServiceResult {
    Ok(request.service_buffer().clone())
}

/// Upper-cases an ASCII string. Anything but a string buffer fails the call
/// with a diagnostic string.
fn uppercase(request: ServiceCallRequestMessage) -> LocalServiceResult {
    let buffer = request.service_buffer();
    if buffer.buffer_type() != Ok(BufferType::CString) {
        return Err(ServiceFailure::fail(Some(ServiceBuffer::of(
            BufferType::CString,
            format!("expected {}, got {}", BufferType::CString, buffer.type_name()),
        )))
        .into());
    }
    Ok(ServiceBuffer::of(
        BufferType::CString,
        Bytes::from(buffer.bytes().to_ascii_uppercase()),
    ))
}

/// Lists the field ids of a fielded buffer as a JSON array.
fn field_ids(request: ServiceCallRequestMessage) -> LocalServiceResult {
    let fields = decode_fielded(request.service_buffer().bytes().clone())?;
    let ids = fields
        .iter()
        .map(|field| field.id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    Ok(ServiceBuffer::of(BufferType::Json, format!("[{ids}]")))
}
