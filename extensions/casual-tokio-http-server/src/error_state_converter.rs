use axum::http::StatusCode;
use casual_http::ErrorState;

/// Maps the error state of a failed call to an HTTP status.
pub fn to_http_status(state: ErrorState) -> StatusCode {
    match state {
        ErrorState::TpeNoEnt => StatusCode::NOT_FOUND,
        ErrorState::TpeTime => StatusCode::REQUEST_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
