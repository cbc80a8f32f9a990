use casual_http::{ErrorState, ServiceBuffer};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("a handler for service {0} is already registered")]
    AlreadyRegistered(String),
}

/// Returned by a service handler to fail the call with a specific error
/// state, optionally attaching a diagnostic buffer for the caller.
///
/// Any other error a handler returns is reported as `TPESVCERR` without a
/// buffer.
#[derive(Debug, Clone, Error)]
#[error("service failed with {error_state:?}")]
pub struct ServiceFailure {
    pub error_state: ErrorState,
    pub buffer: Option<ServiceBuffer>,
}

impl ServiceFailure {
    pub fn new(error_state: ErrorState, buffer: Option<ServiceBuffer>) -> Self {
        Self {
            error_state,
            buffer,
        }
    }

    /// The service ran and returned `TPFAIL`.
    pub fn fail(buffer: Option<ServiceBuffer>) -> Self {
        Self::new(ErrorState::TpeSvcFail, buffer)
    }
}

/// Errors raised while handing work to the pool or waiting for it.
#[derive(Debug, Error)]
pub enum WorkError {
    #[error("worker pool is closed")]
    PoolClosed,

    #[error("could not submit work: {0}")]
    Submit(String),

    #[error("work unit did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("work unit {correlation_id} still running after {waited:?}")]
    Stalled { correlation_id: Uuid, waited: Duration },
}
