mod service_call_reply;
mod service_call_request;

pub use service_call_reply::ServiceCallReplyMessage;
pub use service_call_request::ServiceCallRequestMessage;
