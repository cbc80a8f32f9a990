use crate::{GatewayResponse, error::GatewayError};
use axum::http::StatusCode;

/// Turns a fault that escaped a dispatch path into a response.
pub trait ExceptionHandler: Send + Sync {
    fn handle(&self, error: &GatewayError) -> GatewayResponse;
}

/// Logs the fault at warn level and answers 500 with an empty body and the
/// null content type.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingExceptionHandler;

impl ExceptionHandler for LoggingExceptionHandler {
    fn handle(&self, error: &GatewayError) -> GatewayResponse {
        tracing::warn!(error = ?error, "{}", error);
        GatewayResponse::empty(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
