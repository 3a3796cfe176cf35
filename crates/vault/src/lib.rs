#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod bootstrap;
mod error;
mod orchestrator;
#[cfg(test)]
mod test_support;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

pub use bootstrap::GroupBootstrap;
pub use error::{Result, VaultError};
pub use orchestrator::Orchestrator;
pub use types::{SynthesizeRequest, SynthesizeResponse};

/// Build the orchestrator from the assembled adapter servers
pub fn build_orchestrator(tts_server: Arc<tts::Server>, storage_server: Arc<storage::Server>) -> Arc<Orchestrator> {
    Arc::new(Orchestrator::new(tts_server, storage_server))
}

/// Create the endpoint router for the text-to-speech-to-storage flow
pub fn endpoint_router() -> Router<Arc<Orchestrator>> {
    Router::new()
        .route("/synthesize", get(synthesize_query).post(synthesize_json))
        .route("/group", get(group))
}

/// Handle JSON-body synthesize requests
async fn synthesize_json(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Json<SynthesizeResponse>> {
    synthesize(&orchestrator, request).await
}

/// Handle query-parameter synthesize requests
async fn synthesize_query(
    State(orchestrator): State<Arc<Orchestrator>>,
    Query(request): Query<SynthesizeRequest>,
) -> Result<Json<SynthesizeResponse>> {
    synthesize(&orchestrator, request).await
}

async fn synthesize(orchestrator: &Orchestrator, request: SynthesizeRequest) -> Result<Json<SynthesizeResponse>> {
    tracing::debug!(input_len = request.text.len(), "synthesize handler called");

    let file_url = orchestrator
        .synthesize_and_store(&request.text, request.group_name.as_deref(), request.voice_id.as_deref())
        .await?;

    tracing::debug!("synthesize and store complete");

    Ok(Json(SynthesizeResponse { file_url }))
}

/// Handle group bootstrap requests for the configured default name
async fn group(State(orchestrator): State<Arc<Orchestrator>>) -> Result<Json<storage::Group>> {
    let group = orchestrator.bootstrap().ensure_public_group(None).await?;

    Ok(Json(group))
}
