mod local_request_handler;
mod remote_request_handler;
mod request_body;

pub use local_request_handler::LocalRequestHandler;
pub use remote_request_handler::RemoteRequestHandler;
pub use request_body::read_body;
