use crate::{ServiceCallResponse, ServiceCaller, error::ServiceCallerError};
use casual_http::{AtmiFlags, CasualBuffer, ErrorState};

/// A caller for a node without remote connections: every service is reported
/// as unknown (`TPENOENT`).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEntryCaller;

#[async_trait::async_trait]
impl ServiceCaller for NoEntryCaller {
    async fn make_service_call(
        &self,
        _buffer: CasualBuffer,
        service_name: &str,
        _flags: AtmiFlags,
    ) -> Result<ServiceCallResponse, ServiceCallerError> {
        tracing::debug!("no remote entry for service {}", service_name);
        Ok(ServiceCallResponse::failure(ErrorState::TpeNoEnt, None))
    }
}

/// Stands in for a caller that could not be obtained at startup. Every call
/// fails with [`ServiceCallerError::MissingResource`].
#[derive(Debug, Clone)]
pub struct UnavailableCaller {
    reason: String,
}

impl UnavailableCaller {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait::async_trait]
impl ServiceCaller for UnavailableCaller {
    async fn make_service_call(
        &self,
        _buffer: CasualBuffer,
        _service_name: &str,
        _flags: AtmiFlags,
    ) -> Result<ServiceCallResponse, ServiceCallerError> {
        Err(ServiceCallerError::MissingResource(self.reason.clone()))
    }
}
