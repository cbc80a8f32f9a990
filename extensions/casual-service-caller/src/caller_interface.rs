use crate::{ServiceCallResponse, error::ServiceCallerError};
use casual_http::{AtmiFlags, CasualBuffer};
use std::sync::Arc;

/// Performs a single call to a service that is not hosted in this process.
///
/// Implementations own every transport concern (connection pooling, retries,
/// timeouts); the gateway calls once and translates whatever comes back.
/// An `Err` means the call could not be carried out at all. A call that ran
/// and failed is an `Ok` response with a non-success return state.
#[async_trait::async_trait]
pub trait ServiceCaller: Send + Sync {
    async fn make_service_call(
        &self,
        buffer: CasualBuffer,
        service_name: &str,
        flags: AtmiFlags,
    ) -> Result<ServiceCallResponse, ServiceCallerError>;
}

#[async_trait::async_trait]
impl<T> ServiceCaller for Arc<T>
where
    T: ServiceCaller + ?Sized,
{
    async fn make_service_call(
        &self,
        buffer: CasualBuffer,
        service_name: &str,
        flags: AtmiFlags,
    ) -> Result<ServiceCallResponse, ServiceCallerError> {
        (**self).make_service_call(buffer, service_name, flags).await
    }
}
