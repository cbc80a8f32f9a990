use casual_http::{BufferError, UnsupportedTypeError};
use casual_service_caller::error::ServiceCallerError;
use casual_service_endpoint::error::WorkError;
use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong between reading a request and producing the
/// response, other than a service reporting a failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedTypeError),

    #[error("failed to construct request buffer: {0}")]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Work(#[from] WorkError),

    #[error("service {service_name} did not complete within {waited:?}")]
    BackendStalled {
        service_name: String,
        waited: Duration,
    },

    #[error("remote call failed: {0}")]
    Caller(#[from] ServiceCallerError),

    #[error("successful reply from {service_name} carried no payload")]
    MissingReplyPayload { service_name: String },
}
