use super::read_body;
use crate::{ExceptionHandler, GatewayResponse, error::GatewayError, to_http_status};
use axum::{body::Body, http::StatusCode};
use casual_http::{AtmiFlags, BufferType};
use casual_service_caller::{ServiceCallResponse, ServiceCaller};

/// Serves calls to services reached through the remote service caller.
#[derive(Clone, Debug)]
pub struct RemoteRequestHandler {
    max_body_bytes: usize,
}

impl RemoteRequestHandler {
    pub fn new(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }

    pub async fn handle(
        &self,
        service_caller: &dyn ServiceCaller,
        service_name: &str,
        body: Body,
        buffer_type: BufferType,
        exception_handler: &dyn ExceptionHandler,
    ) -> GatewayResponse {
        match self
            .dispatch(service_caller, service_name, body, buffer_type)
            .await
        {
            Ok(response) => response,
            Err(err) => exception_handler.handle(&err),
        }
    }

    async fn dispatch(
        &self,
        service_caller: &dyn ServiceCaller,
        service_name: &str,
        body: Body,
        buffer_type: BufferType,
    ) -> Result<GatewayResponse, GatewayError> {
        let data = read_body(body, self.max_body_bytes).await?;
        let buffer = buffer_type.wrap(data)?;
        let response = service_caller
            .make_service_call(buffer, service_name, AtmiFlags::TPNOTRAN)
            .await?;

        if response.is_success() {
            let buffer =
                response
                    .casual_buffer
                    .ok_or_else(|| GatewayError::MissingReplyPayload {
                        service_name: service_name.to_owned(),
                    })?;
            return Ok(GatewayResponse::from_buffer(StatusCode::OK, buffer)?);
        }

        tracing::trace!(
            "service call to {} failed: {:?} {:?}",
            service_name,
            response.service_return_state,
            response.error_state
        );
        Self::create_error_response(response)
    }

    fn create_error_response(
        response: ServiceCallResponse,
    ) -> Result<GatewayResponse, GatewayError> {
        let status = to_http_status(response.error_state);
        match response.casual_buffer {
            Some(buffer) => Ok(GatewayResponse::from_buffer(status, buffer)?),
            None => Ok(GatewayResponse::empty(status)),
        }
    }
}
