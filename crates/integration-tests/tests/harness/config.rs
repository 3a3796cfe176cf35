//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use voicevault_config::{
    Config, HealthConfig, ServerConfig, StorageConfig, StorageProviderConfig, StorageProviderType, TtsConfig,
    TtsProviderConfig, TtsProviderType,
};

/// Gateway host baked into every test configuration
pub const TEST_GATEWAY: &str = "test-gateway.example";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                tts: TtsConfig::default(),
                storage: StorageConfig::default(),
            },
        }
    }

    /// Add an ElevenLabs provider pointed at a mock backend
    pub fn with_elevenlabs_provider(mut self, base_url: &str) -> Self {
        self.config.tts.providers.insert(
            "elevenlabs".to_owned(),
            TtsProviderConfig {
                provider_type: TtsProviderType::Elevenlabs,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.to_owned()),
                default_voice: "Rachel".to_owned(),
                model_id: "eleven_multilingual_v2".to_owned(),
            },
        );
        self
    }

    /// Add a Pinata provider pointed at a mock backend
    pub fn with_pinata_provider(mut self, base_url: &str) -> Self {
        self.config.storage.providers.insert(
            "pinata".to_owned(),
            StorageProviderConfig {
                provider_type: StorageProviderType::Pinata,
                jwt: Some(SecretString::from("test-jwt")),
                gateway: TEST_GATEWAY.to_owned(),
                api_base_url: Some(base_url.to_owned()),
                upload_base_url: Some(base_url.to_owned()),
                public_group_name: "VoiceVault Public Files".to_owned(),
            },
        );
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Finish building the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
