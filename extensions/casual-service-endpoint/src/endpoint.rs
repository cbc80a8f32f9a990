use super::LocalServiceEndpointInterface;
use casual_http::{ServiceBuffer, ServiceCallRequestMessage};
use std::collections::HashMap;
use std::sync::RwLock;
use std::{future::Future, pin::Pin, sync::Arc};

pub type LocalServiceResult = Result<ServiceBuffer, Box<dyn std::error::Error + Send + Sync>>;

pub type LocalServiceHandler = Arc<
    dyn Fn(ServiceCallRequestMessage) -> Pin<Box<dyn Future<Output = LocalServiceResult> + Send>>
        + Send
        + Sync,
>;

/// The services hosted in this process, keyed by service name.
pub struct LocalServiceEndpoint {
    handlers: Arc<RwLock<HashMap<String, LocalServiceHandler>>>,
}

impl Default for LocalServiceEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalServiceEndpoint {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl LocalServiceEndpointInterface for LocalServiceEndpoint {
    type HandlersLock = RwLock<HashMap<String, LocalServiceHandler>>;

    fn get_handlers(&self) -> Arc<Self::HandlersLock> {
        self.handlers.clone()
    }
}
