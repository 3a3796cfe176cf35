//! Mock Pinata backend for integration tests
//!
//! Implements the group, upload, and file listing endpoints with the
//! `{"data": …}` response envelope the real API uses

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;

/// Mock Pinata backend with in-memory groups and uploads
pub struct MockPinata {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    groups: Mutex<Vec<(String, String)>>,
    create_group_count: AtomicU32,
    upload_count: AtomicU32,
    uploads: Mutex<Vec<UploadRecord>>,
    list_files_queries: Mutex<Vec<HashMap<String, String>>>,
}

/// One observed upload
#[derive(Clone)]
pub struct UploadRecord {
    pub file_name: String,
    pub mime_type: String,
    pub group_id: Option<String>,
    pub size: usize,
    pub cid: String,
}

impl MockPinata {
    /// Start the mock server with no pre-existing groups
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with_groups(Vec::new()).await
    }

    /// Start the mock server with pre-existing public groups
    pub async fn start_with_groups(groups: Vec<(&str, &str)>) -> anyhow::Result<Self> {
        let groups = groups
            .into_iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();

        let state = Arc::new(MockState {
            groups: Mutex::new(groups),
            create_group_count: AtomicU32::new(0),
            upload_count: AtomicU32::new(0),
            uploads: Mutex::new(Vec::new()),
            list_files_queries: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(
                "/groups/public",
                routing::get(handle_list_groups).post(handle_create_group),
            )
            .route("/files", routing::post(handle_upload))
            .route("/files/public", routing::get(handle_list_files))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL of the mock API (used for both API and upload hosts)
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of group creations observed
    pub fn create_group_count(&self) -> u32 {
        self.state.create_group_count.load(Ordering::SeqCst)
    }

    /// Number of uploads observed
    pub fn upload_count(&self) -> u32 {
        self.state.upload_count.load(Ordering::SeqCst)
    }

    /// Most recent upload, if any
    pub fn last_upload(&self) -> Option<UploadRecord> {
        self.state.uploads.lock().unwrap().last().cloned()
    }

    /// Most recent file listing query parameters, if any
    pub fn last_list_files_query(&self) -> Option<HashMap<String, String>> {
        self.state.list_files_queries.lock().unwrap().last().cloned()
    }
}

impl Drop for MockPinata {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_list_groups(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    let groups: Vec<_> = state
        .groups
        .lock()
        .unwrap()
        .iter()
        .map(|(id, name)| json!({"id": id, "name": name, "created_at": "2026-01-01T00:00:00Z"}))
        .collect();

    Json(json!({"data": {"groups": groups, "next_page_token": null}}))
}

#[derive(Deserialize)]
struct CreateGroupBody {
    name: String,
}

async fn handle_create_group(
    State(state): State<Arc<MockState>>,
    Json(body): Json<CreateGroupBody>,
) -> impl IntoResponse {
    let n = state.create_group_count.fetch_add(1, Ordering::SeqCst) + 1;
    let id = format!("group-{n}");

    state.groups.lock().unwrap().push((id.clone(), body.name.clone()));

    Json(json!({"data": {"id": id, "name": body.name, "created_at": "2026-01-01T00:00:00Z"}}))
}

async fn handle_upload(State(state): State<Arc<MockState>>, mut multipart: Multipart) -> impl IntoResponse {
    let mut file_name = String::new();
    let mut mime_type = String::new();
    let mut group_id = None;
    let mut size = 0;

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("file") => {
                file_name = field.file_name().unwrap_or_default().to_string();
                mime_type = field.content_type().unwrap_or_default().to_string();
                size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
            }
            Some("group_id") => {
                group_id = field.text().await.ok();
            }
            _ => {
                // name and network parts are accepted but not asserted on
                let _ = field.bytes().await;
            }
        }
    }

    if file_name.is_empty() {
        return (StatusCode::BAD_REQUEST, "missing file part").into_response();
    }

    let n = state.upload_count.fetch_add(1, Ordering::SeqCst) + 1;
    let cid = format!("bafymockcid{n}");

    state.uploads.lock().unwrap().push(UploadRecord {
        file_name: file_name.clone(),
        mime_type: mime_type.clone(),
        group_id: group_id.clone(),
        size,
        cid: cid.clone(),
    });

    Json(json!({"data": {
        "id": format!("file-{n}"),
        "name": file_name,
        "cid": cid,
        "size": size,
        "mime_type": mime_type,
        "created_at": "2026-01-01T00:00:00Z",
        "group_id": group_id,
    }}))
    .into_response()
}

async fn handle_list_files(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.list_files_queries.lock().unwrap().push(query);

    let files: Vec<_> = state
        .uploads
        .lock()
        .unwrap()
        .iter()
        .enumerate()
        .map(|(i, upload)| {
            json!({
                "id": format!("file-{}", i + 1),
                "name": upload.file_name,
                "cid": upload.cid,
                "size": upload.size,
                "mime_type": upload.mime_type,
                "created_at": "2026-01-01T00:00:00Z",
                "group_id": upload.group_id,
            })
        })
        .collect();

    Json(json!({"data": {"files": files, "next_page_token": "next-token-1"}}))
}
