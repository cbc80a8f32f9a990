use crate::{LocalServiceEndpoint, LocalServiceEndpointInterface};
use std::sync::Arc;

/// Answers whether a service can be executed in this process.
///
/// This is a read-only query; nothing is cached, each call asks again.
pub trait ServiceRegistryLookup: Send + Sync {
    fn is_local(&self, service_name: &str) -> bool;
}

impl ServiceRegistryLookup for LocalServiceEndpoint {
    fn is_local(&self, service_name: &str) -> bool {
        self.has_service(service_name)
    }
}

/// A lookup backed by a predicate, for wiring in an external registry.
pub struct FnRegistryLookup<F>(pub F);

impl<F> ServiceRegistryLookup for FnRegistryLookup<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_local(&self, service_name: &str) -> bool {
        (self.0)(service_name)
    }
}

impl<T: ServiceRegistryLookup + ?Sized> ServiceRegistryLookup for Arc<T> {
    fn is_local(&self, service_name: &str) -> bool {
        (**self).is_local(service_name)
    }
}
