pub mod pinata;

use async_trait::async_trait;

use crate::types::{FileListPage, FileListQuery, FileUpload, Group, StoredFile};

/// Trait for storage provider implementations
///
/// The orchestrator and the group bootstrap hold providers behind this
/// trait so tests can substitute doubles
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// List groups filtered by public visibility
    async fn list_groups(&self, is_public: bool) -> crate::error::Result<Vec<Group>>;

    /// Create a new group, returning the server-assigned identity
    async fn create_group(&self, name: &str, is_public: bool) -> crate::error::Result<Group>;

    /// Upload a file, returning the stored record with its cid
    async fn upload_file(&self, upload: FileUpload) -> crate::error::Result<StoredFile>;

    /// List stored files one page at a time
    async fn list_files(&self, query: &FileListQuery) -> crate::error::Result<FileListPage>;

    /// Resolve a content identifier to a public gateway URL
    fn file_url(&self, cid: &str) -> String;

    /// Name of the public group that holds generated audio
    fn public_group_name(&self) -> &str;

    /// Get the provider name
    fn name(&self) -> &str;
}
