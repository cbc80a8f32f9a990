use crate::error::GatewayError;
use axum::body::Body;
use bytes::Bytes;

/// Reads the whole request body into memory, failing if it exceeds `limit`
/// bytes or the stream breaks off.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, GatewayError> {
    axum::body::to_bytes(body, limit)
        .await
        .map_err(GatewayError::BodyRead)
}
