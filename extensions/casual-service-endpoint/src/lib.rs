mod endpoint;
pub use endpoint::*;

mod endpoint_interface;
pub use endpoint_interface::*;

pub mod error;

mod registry;
pub use registry::*;

mod with_handlers_trait;
pub use with_handlers_trait::*;

mod work;
pub use work::*;

mod worker_pool;
pub use worker_pool::*;
