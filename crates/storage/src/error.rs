use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use voicevault_core::HttpError;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage service errors with appropriate HTTP status codes
///
/// Client messages stay generic; the underlying cause is logged at the
/// call site, never returned to API consumers
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failure listing or creating a group
    #[error("Group management failed during {operation}: {message}")]
    GroupManagement { operation: &'static str, message: String },

    /// Failure uploading a file
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Backend rejected a file listing request
    #[error("File listing failed ({status}): {message}")]
    Listing { status: u16, message: String },

    /// Authentication failed (missing or invalid credential)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalError(Option<String>),
}

impl HttpError for StorageError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::GroupManagement { .. } | Self::Upload(_) | Self::ConfigError(_) | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            Self::ConnectionError(_) => StatusCode::BAD_GATEWAY,
            Self::Listing { status, .. } => match *status {
                400 => StatusCode::BAD_REQUEST,
                401 => StatusCode::UNAUTHORIZED,
                403 => StatusCode::FORBIDDEN,
                429 => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            },
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::GroupManagement { .. } => "group_management_error",
            Self::Upload(_) => "upload_error",
            Self::Listing { .. } | Self::ConnectionError(_) => "api_error",
            Self::AuthenticationFailed(_) => "authentication_error",
            Self::ConfigError(_) | Self::InternalError(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::GroupManagement { .. } => "Failed to manage public group".to_string(),
            Self::Upload(_) => "Failed to store file".to_string(),
            Self::Listing { message, .. } => message.clone(),
            Self::AuthenticationFailed(_) => "Authentication with the storage backend failed".to_string(),
            Self::ConnectionError(_) => "Storage backend is unreachable".to_string(),
            Self::ConfigError(message) => format!("Configuration error: {message}"),
            Self::InternalError(Some(message)) => message.clone(),
            Self::InternalError(None) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        voicevault_core::error_response(&self)
    }
}
