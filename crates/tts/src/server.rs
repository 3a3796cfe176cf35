use async_trait::async_trait;
use secrecy::SecretString;
use voicevault_config::{TtsProviderConfig, TtsProviderType};
use voicevault_core::RequestContext;

use crate::{
    error::TtsError,
    provider::{TtsProvider, elevenlabs::ElevenLabsProvider},
    types::{SpeechRequest, SpeechResponse},
};

/// TTS server that routes requests to the configured provider
pub struct Server {
    providers: Vec<Box<dyn TtsProvider>>,
}

impl Server {
    /// Synthesize text to speech using the first configured provider
    pub async fn synthesize(
        &self,
        request: SpeechRequest,
        context: &RequestContext,
    ) -> crate::error::Result<SpeechResponse> {
        let provider = self
            .providers
            .first()
            .ok_or_else(|| TtsError::ProviderNotFound("No TTS providers configured".to_string()))?;

        provider.synthesize(request, context).await
    }
}

// The orchestrator holds the server behind the provider trait so tests
// can substitute a double
#[async_trait]
impl TtsProvider for Server {
    async fn synthesize(
        &self,
        request: SpeechRequest,
        context: &RequestContext,
    ) -> crate::error::Result<SpeechResponse> {
        Self::synthesize(self, request, context).await
    }

    fn name(&self) -> &str {
        "tts"
    }
}

/// Builder for constructing the TTS server from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a voicevault_config::Config,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a voicevault_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let mut providers: Vec<Box<dyn TtsProvider>> = Vec::new();

        for (name, provider_config) in &self.config.tts.providers {
            tracing::debug!("Initializing TTS provider: {name}");

            let provider: Box<dyn TtsProvider> = match &provider_config.provider_type {
                TtsProviderType::Elevenlabs => {
                    let api_key = resolve_api_key(name, provider_config)?;

                    Box::new(ElevenLabsProvider::new(
                        name.clone(),
                        api_key,
                        provider_config.base_url.clone(),
                        provider_config.default_voice.clone(),
                        provider_config.model_id.clone(),
                    ))
                }
            };

            providers.push(provider);
        }

        if providers.is_empty() {
            tracing::debug!("No TTS providers configured");
        } else {
            tracing::debug!("TTS server initialized with {} provider(s)", providers.len());
        }

        Ok(Server { providers })
    }
}

fn resolve_api_key(name: &str, config: &TtsProviderConfig) -> crate::error::Result<SecretString> {
    config
        .api_key
        .clone()
        .ok_or_else(|| TtsError::ConfigError(format!("API key required for TTS provider '{name}'")))
}
