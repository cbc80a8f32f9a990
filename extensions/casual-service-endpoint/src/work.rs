use crate::{
    LocalServiceEndpoint, LocalServiceEndpointInterface, LocalServiceHandler,
    error::ServiceFailure,
};
use casual_http::{ErrorState, ServiceCallReplyMessage, ServiceCallRequestMessage};
use uuid::Uuid;

/// One in-process service invocation, ready to be handed to a
/// [`WorkerPool`](crate::WorkerPool).
///
/// A work unit owns its request outright, so concurrent units never share
/// request or reply state.
pub struct ServiceCallWork {
    correlation_id: Uuid,
    request: ServiceCallRequestMessage,
    handler: Option<LocalServiceHandler>,
}

impl ServiceCallWork {
    pub fn new(
        correlation_id: Uuid,
        request: ServiceCallRequestMessage,
        handler: Option<LocalServiceHandler>,
    ) -> Self {
        Self {
            correlation_id,
            request,
            handler,
        }
    }

    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Executes the service and turns its outcome into a reply.
    ///
    /// - `Ok` becomes a successful reply carrying the returned buffer.
    /// - A [`ServiceFailure`] keeps its error state and diagnostic buffer; an
    ///   `Ok` state is reported as `TPESVCFAIL`.
    /// - Any other error becomes `TPESVCERR` without a buffer.
    /// - A missing handler becomes `TPENOENT`.
    pub async fn run(self) -> ServiceCallReplyMessage {
        let ServiceCallWork {
            correlation_id,
            request,
            handler,
        } = self;

        let Some(handler) = handler else {
            tracing::debug!(
                %correlation_id,
                "no local handler for service {}",
                request.service_name()
            );
            return ServiceCallReplyMessage::failure(correlation_id, ErrorState::TpeNoEnt, None);
        };

        let service_name = request.service_name().to_owned();
        match handler(request).await {
            Ok(buffer) => ServiceCallReplyMessage::success(correlation_id, buffer),
            Err(err) => match err.downcast::<ServiceFailure>() {
                Ok(failure) => {
                    let failure = *failure;
                    // A failure never reads as success.
                    let error_state = match failure.error_state {
                        ErrorState::Ok => ErrorState::TpeSvcFail,
                        state => state,
                    };
                    ServiceCallReplyMessage::failure(correlation_id, error_state, failure.buffer)
                }
                Err(err) => {
                    tracing::warn!(
                        %correlation_id,
                        "service {} raised an error: {}",
                        service_name,
                        err
                    );
                    ServiceCallReplyMessage::failure(correlation_id, ErrorState::TpeSvcErr, None)
                }
            },
        }
    }
}

/// Creates the work unit for a request.
pub trait ServiceCallWorkCreator: Send + Sync {
    fn create(&self, correlation_id: Uuid, request: ServiceCallRequestMessage) -> ServiceCallWork;
}

impl ServiceCallWorkCreator for LocalServiceEndpoint {
    fn create(&self, correlation_id: Uuid, request: ServiceCallRequestMessage) -> ServiceCallWork {
        self.create_work(correlation_id, request)
    }
}

impl<F> ServiceCallWorkCreator for F
where
    F: Fn(Uuid, ServiceCallRequestMessage) -> ServiceCallWork + Send + Sync,
{
    fn create(&self, correlation_id: Uuid, request: ServiceCallRequestMessage) -> ServiceCallWork {
        self(correlation_id, request)
    }
}
