use crate::{
    ExceptionHandler, GatewayResponse, ServiceLocality, ServiceRouter,
    handlers::{LocalRequestHandler, RemoteRequestHandler},
};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use casual_http::{BufferType, to_buffer_type};
use casual_service_caller::ServiceCaller;
use casual_service_endpoint::ServiceCallWorkCreator;
use std::sync::Arc;

/// The `/casual/{serviceName}` resource: picks the dispatch path for a
/// service and hands the request to it.
pub struct CasualService {
    pub(crate) router: ServiceRouter,
    pub(crate) work_creator: Arc<dyn ServiceCallWorkCreator>,
    pub(crate) service_caller: Arc<dyn ServiceCaller>,
    pub(crate) exception_handler: Arc<dyn ExceptionHandler>,
    pub(crate) local_request_handler: LocalRequestHandler,
    pub(crate) remote_request_handler: RemoteRequestHandler,
}

impl CasualService {
    pub async fn service_request_x_octet(&self, service_name: &str, body: Body) -> GatewayResponse {
        self.dispatch(service_name, body, BufferType::XOctet).await
    }

    pub async fn service_request_json(&self, service_name: &str, body: Body) -> GatewayResponse {
        self.dispatch(service_name, body, BufferType::Json).await
    }

    pub async fn service_request_field(&self, service_name: &str, body: Body) -> GatewayResponse {
        self.dispatch(service_name, body, BufferType::Fielded).await
    }

    pub async fn service_request_cstring(&self, service_name: &str, body: Body) -> GatewayResponse {
        self.dispatch(service_name, body, BufferType::CString).await
    }

    async fn dispatch(
        &self,
        service_name: &str,
        body: Body,
        buffer_type: BufferType,
    ) -> GatewayResponse {
        match self.router.locate(service_name) {
            ServiceLocality::Local => {
                self.local_request_handler
                    .handle(
                        service_name,
                        body,
                        buffer_type,
                        self.work_creator.as_ref(),
                        self.exception_handler.as_ref(),
                    )
                    .await
            }
            ServiceLocality::Remote => {
                self.remote_request_handler
                    .handle(
                        self.service_caller.as_ref(),
                        service_name,
                        body,
                        buffer_type,
                        self.exception_handler.as_ref(),
                    )
                    .await
            }
        }
    }
}

/// Axum handler for `POST /casual/{service_name}`.
///
/// Selects the entry point matching the request's content type. A missing or
/// unrecognized content type is answered with 415 before any dispatch.
pub async fn service_request_handler(
    State(service): State<Arc<CasualService>>,
    Path(service_name): Path<String>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let response = match to_buffer_type(content_type) {
        Ok(BufferType::XOctet) => service.service_request_x_octet(&service_name, body).await,
        Ok(BufferType::Json) => service.service_request_json(&service_name, body).await,
        Ok(BufferType::Fielded) => service.service_request_field(&service_name, body).await,
        Ok(BufferType::CString) => service.service_request_cstring(&service_name, body).await,
        Err(err) => {
            tracing::debug!("rejecting call to {}: {}", service_name, err);
            GatewayResponse::empty(StatusCode::UNSUPPORTED_MEDIA_TYPE)
        }
    };
    response.into_response()
}
