#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod storage;
pub mod tts;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use server::*;
pub use storage::*;
pub use tts::*;

/// Top-level VoiceVault configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// TTS provider configuration
    #[serde(default)]
    pub tts: TtsConfig,
    /// Storage provider configuration
    #[serde(default)]
    pub storage: StorageConfig,
}
