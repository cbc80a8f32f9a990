mod atmi_flags;
mod error_state;
mod service_return_state;
mod xid;

pub use atmi_flags::AtmiFlags;
pub use error_state::ErrorState;
pub use service_return_state::ServiceReturnState;
pub use xid::Xid;
