mod caller_interface;
pub use caller_interface::*;

pub mod error;

mod no_entry_caller;
pub use no_entry_caller::*;

mod service_call_response;
pub use service_call_response::*;

mod tpcall;
pub use tpcall::*;
