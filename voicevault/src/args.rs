use std::path::PathBuf;

use clap::Parser;

/// VoiceVault audio gateway
#[derive(Debug, Parser)]
#[command(name = "voicevault", about = "Text-to-speech gateway with pinned public audio storage")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "voicevault.toml", env = "VOICEVAULT_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VOICEVAULT_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
