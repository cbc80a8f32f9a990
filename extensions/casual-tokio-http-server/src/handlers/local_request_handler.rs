use super::read_body;
use crate::{ExceptionHandler, GatewayResponse, error::GatewayError, to_http_status};
use axum::{body::Body, http::StatusCode};
use casual_http::{BufferType, ServiceBuffer, ServiceCallReplyMessage, ServiceCallRequestMessage};
use casual_service_endpoint::{ServiceCallWorkCreator, WorkerPool, error::WorkError};
use std::time::Duration;

/// Serves calls to services hosted in this process.
///
/// The request is wrapped in a work unit, handed to the worker pool and
/// awaited before the response is produced.
#[derive(Clone, Debug)]
pub struct LocalRequestHandler {
    pool: WorkerPool,
    call_timeout: Option<Duration>,
    max_body_bytes: usize,
}

impl LocalRequestHandler {
    /// `call_timeout` bounds the wait for a work unit; `None` waits for as
    /// long as the service takes.
    pub fn new(pool: WorkerPool, call_timeout: Option<Duration>, max_body_bytes: usize) -> Self {
        Self {
            pool,
            call_timeout,
            max_body_bytes,
        }
    }

    pub async fn handle(
        &self,
        service_name: &str,
        body: Body,
        buffer_type: BufferType,
        work_creator: &dyn ServiceCallWorkCreator,
        exception_handler: &dyn ExceptionHandler,
    ) -> GatewayResponse {
        match self
            .dispatch(service_name, body, buffer_type, work_creator)
            .await
        {
            Ok(response) => response,
            Err(GatewayError::BackendStalled {
                service_name,
                waited,
            }) => {
                tracing::warn!("service {} stalled, gave up after {:?}", service_name, waited);
                GatewayResponse::empty(StatusCode::REQUEST_TIMEOUT)
            }
            Err(err) => exception_handler.handle(&err),
        }
    }

    async fn dispatch(
        &self,
        service_name: &str,
        body: Body,
        buffer_type: BufferType,
        work_creator: &dyn ServiceCallWorkCreator,
    ) -> Result<GatewayResponse, GatewayError> {
        let data = read_body(body, self.max_body_bytes).await?;
        let request =
            ServiceCallRequestMessage::new(service_name, ServiceBuffer::of(buffer_type, data));

        let correlation_id = request.correlation_id();
        let work = work_creator.create(correlation_id, request);
        let handle = self.pool.submit(work)?;

        let joined = match self.call_timeout {
            Some(limit) => handle.join_timeout(limit).await,
            None => handle.join().await,
        };
        let reply = joined.map_err(|err| match err {
            WorkError::Stalled { waited, .. } => GatewayError::BackendStalled {
                service_name: service_name.to_owned(),
                waited,
            },
            other => GatewayError::Work(other),
        })?;

        if reply.error().is_ok() {
            let buffer =
                reply
                    .into_service_buffer()
                    .ok_or_else(|| GatewayError::MissingReplyPayload {
                        service_name: service_name.to_owned(),
                    })?;
            return Ok(GatewayResponse::from_buffer(StatusCode::OK, buffer)?);
        }

        tracing::trace!(
            %correlation_id,
            "local call to {} failed: {:?}",
            service_name,
            reply.error()
        );
        Self::create_error_response(reply)
    }

    fn create_error_response(
        reply: ServiceCallReplyMessage,
    ) -> Result<GatewayResponse, GatewayError> {
        let status = to_http_status(reply.error());
        match reply.into_service_buffer() {
            Some(buffer) if !buffer.is_empty() => Ok(GatewayResponse::from_buffer(status, buffer)?),
            _ => Ok(GatewayResponse::empty(status)),
        }
    }
}
