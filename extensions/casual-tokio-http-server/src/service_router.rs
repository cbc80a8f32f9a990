use casual_service_endpoint::ServiceRegistryLookup;
use std::sync::Arc;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ServiceLocality {
    /// Executed in this process through the worker pool.
    Local,
    /// Executed through the remote service caller.
    Remote,
}

/// Decides which dispatch path serves a service.
#[derive(Clone)]
pub struct ServiceRouter {
    registry: Arc<dyn ServiceRegistryLookup>,
}

impl ServiceRouter {
    pub fn new(registry: Arc<dyn ServiceRegistryLookup>) -> Self {
        Self { registry }
    }

    pub fn locate(&self, service_name: &str) -> ServiceLocality {
        if self.registry.is_local(service_name) {
            ServiceLocality::Local
        } else {
            ServiceLocality::Remote
        }
    }
}
