use uuid::Uuid;

/// Generates a fresh correlation id for one service call.
///
/// Random (v4) ids are used so that ids stay unique across gateway
/// instances and restarts, not only within this process.
#[inline]
pub fn generate_correlation_id() -> Uuid {
    Uuid::new_v4()
}
