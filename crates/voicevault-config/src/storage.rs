use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;

/// Top-level storage configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Storage provider configurations keyed by name
    #[serde(default)]
    pub providers: IndexMap<String, StorageProviderConfig>,
}

/// Configuration for a single storage provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: StorageProviderType,
    /// API credential (Pinata JWT)
    #[serde(default)]
    pub jwt: Option<SecretString>,
    /// Gateway host that resolves content identifiers to downloadable
    /// resources (e.g. "example.mypinata.cloud")
    #[serde(default)]
    pub gateway: String,
    /// API base URL override
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Upload endpoint base URL override
    #[serde(default)]
    pub upload_base_url: Option<String>,
    /// Name of the public group that holds generated audio
    #[serde(default = "default_public_group_name")]
    pub public_group_name: String,
}

/// Supported storage providers
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageProviderType {
    /// Pinata pinning service
    Pinata,
}

fn default_public_group_name() -> String {
    "VoiceVault Public Files".to_string()
}
