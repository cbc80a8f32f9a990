mod buffer_error;
mod buffer_type;
mod casual_buffer;
mod fielded;
mod service_buffer;

pub use buffer_error::{BufferError, UnsupportedTypeError};
pub use buffer_type::BufferType;
pub use casual_buffer::CasualBuffer;
pub use fielded::{FieldedEntry, decode_fielded};
pub use service_buffer::ServiceBuffer;
