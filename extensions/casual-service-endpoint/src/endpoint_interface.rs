use super::{
    LocalServiceHandler, LocalServiceResult, ServiceCallWork, error::EndpointError,
    with_handlers_trait::WithHandlers,
};
use casual_http::ServiceCallRequestMessage;
use std::{collections::hash_map::Entry, future::Future, sync::Arc};
use uuid::Uuid;

/// Registration and lookup of in-process services.
///
/// Implementors only provide the handler map; everything else is shared.
pub trait LocalServiceEndpointInterface: Send + Sync {
    type HandlersLock: WithHandlers;

    fn get_handlers(&self) -> Arc<Self::HandlersLock>;

    /// Registers `handler` under `service_name`. A name can only be taken once.
    fn register<F, Fut>(&self, service_name: &str, handler: F) -> Result<(), EndpointError>
    where
        F: Fn(ServiceCallRequestMessage) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = LocalServiceResult> + Send + 'static,
    {
        self.get_handlers()
            .write_handlers(|handlers| match handlers.entry(service_name.to_owned()) {
                Entry::Occupied(_) => Err(EndpointError::AlreadyRegistered(
                    service_name.to_owned(),
                )),
                Entry::Vacant(entry) => {
                    let wrapped = move |request: ServiceCallRequestMessage| {
                        Box::pin(handler(request))
                            as std::pin::Pin<Box<dyn Future<Output = _> + Send>>
                    };
                    entry.insert(Arc::new(wrapped));
                    tracing::debug!("registered local service {}", service_name);
                    Ok(())
                }
            })
    }

    /// Removes a service. Returns whether it was registered.
    fn deregister(&self, service_name: &str) -> bool {
        self.get_handlers()
            .write_handlers(|handlers| handlers.remove(service_name).is_some())
    }

    fn has_service(&self, service_name: &str) -> bool {
        self.get_handlers()
            .read_handlers(|handlers| handlers.contains_key(service_name))
    }

    fn handler(&self, service_name: &str) -> Option<LocalServiceHandler> {
        self.get_handlers()
            .read_handlers(|handlers| handlers.get(service_name).cloned())
    }

    /// Binds a request to whatever handler is registered for it right now.
    ///
    /// A service removed between the locality check and this point yields a
    /// work unit that answers `TPENOENT`.
    fn create_work(
        &self,
        correlation_id: Uuid,
        request: ServiceCallRequestMessage,
    ) -> ServiceCallWork {
        let handler = self.handler(request.service_name());
        ServiceCallWork::new(correlation_id, request, handler)
    }
}
