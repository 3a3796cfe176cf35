//! Call-counting test doubles for the storage and TTS adapters

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use storage::{FileListPage, FileListQuery, FileUpload, Group, StorageError, StorageProvider, StoredFile};
use tts::{SpeechRequest, SpeechResponse, TtsError, TtsProvider};
use voicevault_core::RequestContext;

pub const MOCK_CID: &str = "bafybeimockcid";
pub const MOCK_GATEWAY: &str = "gateway.test";

/// Storage double that tracks calls and keeps created groups visible
/// to subsequent listings
pub struct MockStorage {
    groups: Mutex<Vec<Group>>,
    list_groups_calls: AtomicU32,
    create_group_calls: AtomicU32,
    upload_calls: AtomicU32,
    uploads: Mutex<Vec<FileUpload>>,
    fail_groups: bool,
    fail_upload: bool,
}

impl MockStorage {
    pub fn with_groups(groups: Vec<Group>) -> Self {
        Self {
            groups: Mutex::new(groups),
            list_groups_calls: AtomicU32::new(0),
            create_group_calls: AtomicU32::new(0),
            upload_calls: AtomicU32::new(0),
            uploads: Mutex::new(Vec::new()),
            fail_groups: false,
            fail_upload: false,
        }
    }

    pub fn failing_groups() -> Self {
        Self {
            fail_groups: true,
            ..Self::with_groups(Vec::new())
        }
    }

    pub fn failing_upload() -> Self {
        Self {
            fail_upload: true,
            ..Self::with_groups(Vec::new())
        }
    }

    pub fn list_groups_calls(&self) -> u32 {
        self.list_groups_calls.load(Ordering::SeqCst)
    }

    pub fn create_group_calls(&self) -> u32 {
        self.create_group_calls.load(Ordering::SeqCst)
    }

    pub fn upload_calls(&self) -> u32 {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn last_upload(&self) -> Option<FileUpload> {
        self.uploads.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl StorageProvider for MockStorage {
    async fn list_groups(&self, is_public: bool) -> storage::Result<Vec<Group>> {
        self.list_groups_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_groups {
            return Err(StorageError::GroupManagement {
                operation: "list",
                message: "mock backend down".to_string(),
            });
        }

        let groups = self.groups.lock().unwrap();
        Ok(groups.iter().filter(|g| g.is_public == is_public).cloned().collect())
    }

    async fn create_group(&self, name: &str, is_public: bool) -> storage::Result<Group> {
        let n = self.create_group_calls.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail_groups {
            return Err(StorageError::GroupManagement {
                operation: "create",
                message: "mock backend down".to_string(),
            });
        }

        let group = Group {
            id: format!("g-created-{n}"),
            name: name.to_string(),
            is_public,
        };
        self.groups.lock().unwrap().push(group.clone());
        Ok(group)
    }

    async fn upload_file(&self, upload: FileUpload) -> storage::Result<StoredFile> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_upload {
            return Err(StorageError::Upload("mock upload refused".to_string()));
        }

        let stored = StoredFile {
            id: "f-1".to_string(),
            name: Some(upload.file_name.clone()),
            cid: MOCK_CID.to_string(),
            size: upload.bytes.len() as u64,
            mime_type: Some(upload.mime_type.clone()),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            group_id: upload.group_id.clone(),
        };
        self.uploads.lock().unwrap().push(upload);
        Ok(stored)
    }

    async fn list_files(&self, _query: &FileListQuery) -> storage::Result<FileListPage> {
        Ok(FileListPage {
            files: Vec::new(),
            next_page_token: None,
        })
    }

    fn file_url(&self, cid: &str) -> String {
        format!("https://{MOCK_GATEWAY}/files/{cid}")
    }

    fn public_group_name(&self) -> &str {
        "VoiceVault Public Files"
    }

    fn name(&self) -> &str {
        "mock-storage"
    }
}

/// TTS double that records the voice each request used
pub struct MockTts {
    synthesize_calls: AtomicU32,
    voices: Mutex<Vec<Option<String>>>,
    fail: bool,
}

impl MockTts {
    pub fn new() -> Self {
        Self {
            synthesize_calls: AtomicU32::new(0),
            voices: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::new() }
    }

    pub fn synthesize_calls(&self) -> u32 {
        self.synthesize_calls.load(Ordering::SeqCst)
    }

    pub fn last_voice(&self) -> Option<String> {
        self.voices.lock().unwrap().last().cloned().flatten()
    }
}

#[async_trait]
impl TtsProvider for MockTts {
    async fn synthesize(&self, request: SpeechRequest, _context: &RequestContext) -> tts::Result<SpeechResponse> {
        self.synthesize_calls.fetch_add(1, Ordering::SeqCst);
        self.voices.lock().unwrap().push(request.voice.clone());

        if self.fail {
            return Err(TtsError::ProviderApiError {
                status: 500,
                message: "mock synthesis refused".to_string(),
            });
        }

        Ok(SpeechResponse {
            audio: b"ID3mock-mpeg-frames".to_vec(),
            content_type: "audio/mpeg".to_string(),
        })
    }

    fn name(&self) -> &str {
        "mock-tts"
    }
}
