#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Router, extract::State, routing::post};

pub use error::{Result, TtsError};
pub use provider::TtsProvider;
pub use server::{Server, TtsServerBuilder};
pub use types::{SpeechRequest, SpeechResponse};
use request::ExtractPayload;

/// Build the TTS server from configuration
pub fn build_server(config: &voicevault_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TtsServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for raw speech synthesis
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/speech", post(synthesize))
}

/// Handle raw speech synthesis requests
///
/// Returns the synthesized MPEG bytes directly instead of storing them
async fn synthesize(
    State(server): State<Arc<Server>>,
    ExtractPayload(context, request): ExtractPayload<types::SpeechRequest>,
) -> Result<axum::response::Response> {
    tracing::debug!("TTS speech handler called, input_len={}", request.input.len());

    let response = server.synthesize(request, &context).await?;

    tracing::debug!("Speech synthesis complete");

    Ok(response.into_response())
}
