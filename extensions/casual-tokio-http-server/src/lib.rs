//! Note: This gateway does not include authentication or authorization. It is
//! meant to sit behind whatever ingress enforces those, or to be used on a
//! trusted internal network.

mod casual_service;
pub use casual_service::*;

mod config;
pub use config::*;

pub mod error;

mod error_state_converter;
pub use error_state_converter::*;

mod exception_handler;
pub use exception_handler::*;

mod gateway_response;
pub use gateway_response::*;

pub mod handlers;

mod http_gateway_server;
pub use http_gateway_server::*;

mod service_router;
pub use service_router::*;

// Re-exported so that services can be registered without depending on the
// endpoint crate directly.
pub use casual_service_endpoint::{LocalServiceEndpoint, LocalServiceEndpointInterface};
