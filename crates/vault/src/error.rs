use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use voicevault_core::HttpError;

pub type Result<T> = std::result::Result<T, VaultError>;

/// Orchestration errors for the text-to-speech-to-storage flow
///
/// Each variant marks the step that failed; the underlying cause is
/// kept for logging while client messages stay generic
#[derive(Debug, Error)]
pub enum VaultError {
    /// User-supplied text empty or whitespace-only
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure listing or creating the public group
    #[error("group bootstrap failed")]
    Group(#[source] storage::StorageError),

    /// Speech backend failure or unexpected response shape
    #[error("speech synthesis failed")]
    Synthesis(#[source] tts::TtsError),

    /// Storage backend failure during upload or URL resolution
    #[error("audio upload failed")]
    Upload(#[source] storage::StorageError),
}

impl HttpError for VaultError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Group(_) | Self::Synthesis(_) | Self::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidInput(_) => "invalid_request_error",
            Self::Group(_) => "group_management_error",
            Self::Synthesis(_) => "synthesis_error",
            Self::Upload(_) => "upload_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::InvalidInput(message) => format!("Invalid input: {message}"),
            Self::Group(_) => "Failed to manage public group".to_string(),
            Self::Synthesis(_) => "Failed to generate audio".to_string(),
            Self::Upload(_) => "Failed to store generated audio".to_string(),
        }
    }
}

impl IntoResponse for VaultError {
    fn into_response(self) -> Response {
        voicevault_core::error_response(&self)
    }
}
