#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::Query, extract::State, routing::get};

pub use error::{Result, StorageError};
pub use provider::StorageProvider;
pub use server::{Server, StorageServerBuilder};
pub use types::{FileListPage, FileListQuery, FileUpload, Group, StoredFile};

/// Build the storage server from configuration
pub fn build_server(config: &voicevault_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        StorageServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize storage server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for stored file listing
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/files", get(list_files))
}

/// Handle file listing requests, passing the pagination token through
async fn list_files(
    State(server): State<Arc<Server>>,
    Query(query): Query<FileListQuery>,
) -> Result<Json<FileListPage>> {
    tracing::debug!(
        group_id = query.group_id.as_deref().unwrap_or("<none>"),
        "file listing handler called"
    );

    let page = server.list_files(&query).await?;

    Ok(Json(page))
}
