use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Settings of a gateway instance. Every field has a default, so an empty
/// configuration source is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,

    /// How many local service calls may execute at once.
    pub worker_pool_size: usize,

    /// Upper bound for waiting on a local service call, in milliseconds.
    /// Unset means wait indefinitely.
    pub local_call_timeout_ms: Option<u64>,

    /// Request bodies larger than this are rejected.
    pub max_request_body_bytes: usize,

    /// Default log filter, used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            worker_pool_size: casual_service_endpoint::DEFAULT_WORKER_POOL_SIZE,
            local_call_timeout_ms: None,
            max_request_body_bytes: DEFAULT_MAX_REQUEST_BODY_BYTES,
            log_level: "info".to_owned(),
        }
    }
}

impl GatewayConfig {
    pub fn local_call_timeout(&self) -> Option<Duration> {
        self.local_call_timeout_ms.map(Duration::from_millis)
    }
}
