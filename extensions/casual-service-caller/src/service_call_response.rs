use casual_http::{ErrorState, ServiceBuffer, ServiceReturnState};

/// The translated result of a remote call.
///
/// `casual_buffer` is always present on `TpSuccess`; on failure it is only
/// present when the remote side attached diagnostic data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCallResponse {
    pub service_return_state: ServiceReturnState,
    pub error_state: ErrorState,
    pub casual_buffer: Option<ServiceBuffer>,
}

impl ServiceCallResponse {
    pub fn new(
        service_return_state: ServiceReturnState,
        error_state: ErrorState,
        casual_buffer: Option<ServiceBuffer>,
    ) -> Self {
        Self {
            service_return_state,
            error_state,
            casual_buffer,
        }
    }

    pub fn success(casual_buffer: ServiceBuffer) -> Self {
        Self::new(
            ServiceReturnState::TpSuccess,
            ErrorState::Ok,
            Some(casual_buffer),
        )
    }

    pub fn failure(error_state: ErrorState, casual_buffer: Option<ServiceBuffer>) -> Self {
        Self::new(ServiceReturnState::TpFail, error_state, casual_buffer)
    }

    pub fn is_success(&self) -> bool {
        self.service_return_state == ServiceReturnState::TpSuccess
    }
}
