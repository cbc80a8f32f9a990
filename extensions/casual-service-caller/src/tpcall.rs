use crate::{ServiceCallResponse, ServiceCaller, error::ServiceCallerError};
use casual_http::{AtmiFlags, CasualBuffer, ErrorState, ServiceBuffer, ServiceReturnState};
use std::sync::Arc;

/// Everything a `tpcall` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReturn {
    pub reply_buffer: ServiceBuffer,
    pub service_return_state: ServiceReturnState,
    pub error_state: ErrorState,
    pub user_defined_code: i64,
}

/// The low-level connector: a synchronous request/reply call to a named
/// service somewhere in the casual domain.
#[async_trait::async_trait]
pub trait CasualCaller: Send + Sync {
    async fn tpcall(
        &self,
        service_name: &str,
        buffer: CasualBuffer,
        flags: AtmiFlags,
    ) -> Result<ServiceReturn, ServiceCallerError>;
}

/// Adapts a [`CasualCaller`] to the gateway's [`ServiceCaller`] seam.
///
/// The reply buffer is only kept for successful calls; whatever a failed
/// call returned is dropped.
pub struct TpCallServiceCaller<C: ?Sized> {
    caller: Arc<C>,
}

impl<C: CasualCaller + ?Sized> TpCallServiceCaller<C> {
    pub fn new(caller: Arc<C>) -> Self {
        Self { caller }
    }
}

#[async_trait::async_trait]
impl<C: CasualCaller + ?Sized> ServiceCaller for TpCallServiceCaller<C> {
    async fn make_service_call(
        &self,
        buffer: CasualBuffer,
        service_name: &str,
        flags: AtmiFlags,
    ) -> Result<ServiceCallResponse, ServiceCallerError> {
        let reply = self.caller.tpcall(service_name, buffer, flags).await?;
        let casual_buffer = match reply.service_return_state {
            ServiceReturnState::TpSuccess => Some(reply.reply_buffer),
            ServiceReturnState::TpFail => None,
        };
        Ok(ServiceCallResponse::new(
            reply.service_return_state,
            reply.error_state,
            casual_buffer,
        ))
    }
}
