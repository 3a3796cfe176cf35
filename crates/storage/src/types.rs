use serde::{Deserialize, Serialize};

/// A named collection in the storage backend used to scope and publicly
/// expose a set of uploaded files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Group {
    /// Server-assigned identifier
    pub id: String,
    /// Group name; uniqueness is not enforced by the backend
    pub name: String,
    /// Whether files in the group are publicly retrievable
    pub is_public: bool,
}

/// A file owned by the storage backend
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoredFile {
    pub id: String,
    pub name: Option<String>,
    /// Content-derived identifier, immutable once assigned
    pub cid: String,
    /// Size in bytes
    pub size: u64,
    pub mime_type: Option<String>,
    pub created_at: String,
    pub group_id: Option<String>,
}

/// An in-memory artifact about to be uploaded
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
    pub group_id: Option<String>,
}

/// Query parameters for file listing, mirrored from the HTTP surface
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileListQuery {
    pub group_id: Option<String>,
    pub page_token: Option<String>,
    pub limit: Option<u32>,
}

/// One page of stored files plus the token for the next page
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileListPage {
    pub files: Vec<StoredFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}
