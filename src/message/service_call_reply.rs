use crate::buffer::ServiceBuffer;
use crate::xatmi::ErrorState;
use uuid::Uuid;

/// The outcome of an in-process service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCallReplyMessage {
    correlation_id: Uuid,
    error: ErrorState,
    service_buffer: Option<ServiceBuffer>,
}

impl ServiceCallReplyMessage {
    pub fn new(
        correlation_id: Uuid,
        error: ErrorState,
        service_buffer: Option<ServiceBuffer>,
    ) -> Self {
        Self {
            correlation_id,
            error,
            service_buffer,
        }
    }

    pub fn success(correlation_id: Uuid, service_buffer: ServiceBuffer) -> Self {
        Self::new(correlation_id, ErrorState::Ok, Some(service_buffer))
    }

    pub fn failure(
        correlation_id: Uuid,
        error: ErrorState,
        service_buffer: Option<ServiceBuffer>,
    ) -> Self {
        Self::new(correlation_id, error, service_buffer)
    }

    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    pub fn error(&self) -> ErrorState {
        self.error
    }

    pub fn service_buffer(&self) -> Option<&ServiceBuffer> {
        self.service_buffer.as_ref()
    }

    pub fn into_service_buffer(self) -> Option<ServiceBuffer> {
        self.service_buffer
    }
}
