use crate::endpoint::LocalServiceHandler;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Closure-passing access to a shared map of service handlers.
///
/// Callers describe the work and the implementation decides how to lock,
/// so no guard ever escapes into async code.
pub trait WithHandlers: Send + Sync {
    /// Runs `f` with shared access to the handlers.
    fn read_handlers<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&HashMap<String, LocalServiceHandler>) -> R;

    /// Runs `f` with exclusive access to the handlers.
    fn write_handlers<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut HashMap<String, LocalServiceHandler>) -> R;
}

impl WithHandlers for RwLock<HashMap<String, LocalServiceHandler>> {
    fn read_handlers<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&HashMap<String, LocalServiceHandler>) -> R,
    {
        // A panicking writer cannot leave the map half-updated, so the data
        // behind a poisoned lock is still usable.
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write_handlers<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut HashMap<String, LocalServiceHandler>) -> R,
    {
        let mut guard = self.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
