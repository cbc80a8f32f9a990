use std::io;
use thiserror::Error;

/// Errors raised while performing a remote call, as opposed to a call that
/// completed with a non-success outcome.
#[derive(Debug, Error)]
pub enum ServiceCallerError {
    /// A transport-level or I/O error occurred during the call.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No caller is available to reach remote services.
    #[error("missing resource: {0}")]
    MissingResource(String),
}
