use axum::{Json, response::Response};
use http::StatusCode;
use serde::Serialize;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type. The error shaping
/// below turns these into actual HTTP responses, keeping domain errors
/// decoupled from the individual handlers.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Shared JSON error body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    message: String,
    r#type: String,
    code: u16,
}

/// Shape a domain error into the shared JSON error response
pub fn error_response<E: HttpError>(error: &E) -> Response {
    use axum::response::IntoResponse;

    let status = error.status_code();

    let body = ErrorResponse {
        error: ErrorDetails {
            message: error.client_message(),
            r#type: error.error_type().to_string(),
            code: status.as_u16(),
        },
    };

    (status, Json(body)).into_response()
}
