use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    error::StorageError,
    http_client::http_client,
    types::{FileListPage, FileListQuery, FileUpload, Group, StoredFile},
};

use super::StorageProvider;

const DEFAULT_PINATA_API_URL: &str = "https://api.pinata.cloud/v3";
const DEFAULT_PINATA_UPLOAD_URL: &str = "https://uploads.pinata.cloud/v3";

/// Default page size when the caller does not supply one
const DEFAULT_LIST_LIMIT: u32 = 100;

/// Pinata pinning service provider
pub struct PinataProvider {
    client: Client,
    api_base_url: String,
    upload_base_url: String,
    jwt: SecretString,
    gateway: String,
    public_group_name: String,
    name: String,
}

impl PinataProvider {
    pub fn new(
        name: String,
        jwt: SecretString,
        gateway: String,
        api_base_url: Option<String>,
        upload_base_url: Option<String>,
        public_group_name: String,
    ) -> Self {
        let client = http_client();
        let api_base_url = api_base_url.unwrap_or_else(|| DEFAULT_PINATA_API_URL.to_string());
        let upload_base_url = upload_base_url.unwrap_or_else(|| DEFAULT_PINATA_UPLOAD_URL.to_string());

        Self {
            client,
            api_base_url,
            upload_base_url,
            jwt,
            gateway,
            public_group_name,
            name,
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.jwt.expose_secret())
    }
}

/// Pinata scopes groups and files by network segment rather than a flag
const fn network(is_public: bool) -> &'static str {
    if is_public { "public" } else { "private" }
}

/// Pinata wraps every response body in a `data` envelope
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct GroupListWire {
    groups: Vec<GroupWire>,
}

#[derive(Deserialize)]
struct GroupWire {
    id: String,
    name: String,
}

impl GroupWire {
    fn into_group(self, is_public: bool) -> Group {
        Group {
            id: self.id,
            name: self.name,
            is_public,
        }
    }
}

#[derive(serde::Serialize)]
struct CreateGroupWire<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct FileListWire {
    files: Vec<FileWire>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct FileWire {
    id: String,
    name: Option<String>,
    cid: String,
    size: u64,
    mime_type: Option<String>,
    created_at: String,
    group_id: Option<String>,
}

impl From<FileWire> for StoredFile {
    fn from(wire: FileWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            cid: wire.cid,
            size: wire.size,
            mime_type: wire.mime_type,
            created_at: wire.created_at,
            group_id: wire.group_id,
        }
    }
}

#[async_trait]
impl StorageProvider for PinataProvider {
    async fn list_groups(&self, is_public: bool) -> crate::error::Result<Vec<Group>> {
        let url = format!("{}/groups/{}", self.api_base_url, network(is_public));

        tracing::debug!(provider = %self.name, is_public, "listing groups");

        let response = self
            .client
            .get(&url)
            .header(http::header::AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "group listing request failed");
                StorageError::GroupManagement {
                    operation: "list",
                    message: e.to_string(),
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, %status, "Pinata group listing error");

            return Err(StorageError::GroupManagement {
                operation: "list",
                message: format!("{status}: {error_text}"),
            });
        }

        let wire: Envelope<GroupListWire> = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse group listing response");
            StorageError::GroupManagement {
                operation: "list",
                message: e.to_string(),
            }
        })?;

        Ok(wire
            .data
            .groups
            .into_iter()
            .map(|group| group.into_group(is_public))
            .collect())
    }

    async fn create_group(&self, name: &str, is_public: bool) -> crate::error::Result<Group> {
        let url = format!("{}/groups/{}", self.api_base_url, network(is_public));

        tracing::debug!(provider = %self.name, group_name = %name, is_public, "creating group");

        let response = self
            .client
            .post(&url)
            .header(http::header::AUTHORIZATION, self.bearer())
            .json(&CreateGroupWire { name })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "group creation request failed");
                StorageError::GroupManagement {
                    operation: "create",
                    message: e.to_string(),
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, %status, "Pinata group creation error");

            return Err(StorageError::GroupManagement {
                operation: "create",
                message: format!("{status}: {error_text}"),
            });
        }

        let wire: Envelope<GroupWire> = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse group creation response");
            StorageError::GroupManagement {
                operation: "create",
                message: e.to_string(),
            }
        })?;

        Ok(wire.data.into_group(is_public))
    }

    async fn upload_file(&self, upload: FileUpload) -> crate::error::Result<StoredFile> {
        let url = format!("{}/files", self.upload_base_url);

        tracing::debug!(
            provider = %self.name,
            file_name = %upload.file_name,
            size = upload.bytes.len(),
            "uploading file"
        );

        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)
            .map_err(|e| StorageError::Upload(format!("invalid MIME type '{}': {e}", upload.mime_type)))?;

        let mut form = reqwest::multipart::Form::new()
            .text("network", "public")
            .text("name", upload.file_name)
            .part("file", part);

        if let Some(group_id) = upload.group_id {
            form = form.text("group_id", group_id);
        }

        let response = self
            .client
            .post(&url)
            .header(http::header::AUTHORIZATION, self.bearer())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "upload request failed");
                StorageError::Upload(format!("Failed to send upload to Pinata: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, %status, "Pinata upload error");

            return Err(StorageError::Upload(format!("{status}: {error_text}")));
        }

        let wire: Envelope<FileWire> = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse upload response");
            StorageError::Upload(format!("unexpected upload response shape: {e}"))
        })?;

        Ok(wire.data.into())
    }

    async fn list_files(&self, query: &FileListQuery) -> crate::error::Result<FileListPage> {
        let url = format!("{}/files/public", self.api_base_url);

        let mut request = self
            .client
            .get(&url)
            .header(http::header::AUTHORIZATION, self.bearer())
            .query(&[("limit", query.limit.unwrap_or(DEFAULT_LIST_LIMIT).to_string())]);

        if let Some(ref page_token) = query.page_token {
            request = request.query(&[("pageToken", page_token)]);
        }

        if let Some(ref group_id) = query.group_id {
            request = request.query(&[("group", group_id)]);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "file listing request failed");
            StorageError::ConnectionError(format!("Failed to send request to Pinata: {e}"))
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, %status, "Pinata file listing error");

            return Err(StorageError::Listing {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let wire: Envelope<FileListWire> = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse file listing response");
            StorageError::InternalError(None)
        })?;

        Ok(FileListPage {
            files: wire.data.files.into_iter().map(Into::into).collect(),
            next_page_token: wire.data.next_page_token,
        })
    }

    fn file_url(&self, cid: &str) -> String {
        format!("https://{}/files/{cid}", self.gateway)
    }

    fn public_group_name(&self) -> &str {
        &self.public_group_name
    }

    fn name(&self) -> &str {
        &self.name
    }
}
