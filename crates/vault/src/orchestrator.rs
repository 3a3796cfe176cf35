use std::sync::Arc;

use storage::{FileUpload, StorageProvider};
use tts::{SpeechRequest, TtsProvider};
use voicevault_core::RequestContext;

use crate::{
    bootstrap::GroupBootstrap,
    error::{Result, VaultError},
};

/// MIME type of synthesized audio artifacts
const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// Composes group bootstrap, speech synthesis, and storage into one
/// user-facing operation: text in, durable public audio URL out
///
/// Adapters are injected as collaborators so tests can substitute
/// doubles. Steps run sequentially; any failure aborts the remainder
/// with no compensating rollback (a group created in step 1 stays).
pub struct Orchestrator {
    synthesizer: Arc<dyn TtsProvider>,
    storage: Arc<dyn StorageProvider>,
    bootstrap: GroupBootstrap,
}

impl Orchestrator {
    pub fn new(synthesizer: Arc<dyn TtsProvider>, storage: Arc<dyn StorageProvider>) -> Self {
        let bootstrap = GroupBootstrap::new(Arc::clone(&storage));

        Self {
            synthesizer,
            storage,
            bootstrap,
        }
    }

    /// Access the group bootstrap service
    pub const fn bootstrap(&self) -> &GroupBootstrap {
        &self.bootstrap
    }

    /// Turn text into a stored, publicly retrievable audio artifact
    ///
    /// Returns the resolved public URL, non-empty on success. Validation
    /// happens before any network call; on success exactly one file has
    /// been stored.
    pub async fn synthesize_and_store(
        &self,
        text: &str,
        group_name: Option<&str>,
        voice: Option<&str>,
    ) -> Result<String> {
        if text.trim().is_empty() {
            return Err(VaultError::InvalidInput(
                "'text' is required and must be a non-empty string".to_string(),
            ));
        }

        let group = self.bootstrap.ensure_public_group(group_name).await?;

        let request = SpeechRequest {
            input: text.to_string(),
            voice: voice.map(str::to_string),
        };

        let speech = self
            .synthesizer
            .synthesize(request, &RequestContext::empty())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "speech synthesis failed");
                VaultError::Synthesis(e)
            })?;

        let file_name = format!("generated-audio-{}.mp3", jiff::Timestamp::now().as_millisecond());

        tracing::debug!(
            group_id = %group.id,
            %file_name,
            audio_bytes = speech.audio.len(),
            "uploading synthesized audio"
        );

        let stored = self
            .storage
            .upload_file(FileUpload {
                bytes: speech.audio,
                file_name,
                mime_type: AUDIO_MIME_TYPE.to_string(),
                group_id: Some(group.id),
            })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "audio upload failed");
                VaultError::Upload(e)
            })?;

        let url = self.storage.file_url(&stored.cid);

        tracing::info!(cid = %stored.cid, "synthesized audio stored");

        Ok(url)
    }
}
