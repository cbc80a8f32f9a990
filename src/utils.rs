mod generate_correlation_id;
pub use generate_correlation_id::*;
