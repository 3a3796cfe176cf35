use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if required backends are missing or a provider
    /// configuration is incomplete
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_has_backends()?;
        self.validate_storage_config()?;
        Ok(())
    }

    /// Both backends are required: synthesized audio has nowhere to go
    /// without storage, and storage has nothing to store without TTS
    fn validate_has_backends(&self) -> anyhow::Result<()> {
        if self.tts.providers.is_empty() {
            anyhow::bail!("at least one TTS provider must be configured");
        }

        if self.storage.providers.is_empty() {
            anyhow::bail!("at least one storage provider must be configured");
        }

        Ok(())
    }

    /// Validate storage-specific configuration
    ///
    /// Credentials are checked here so a missing JWT fails at startup
    /// rather than on the first upload
    fn validate_storage_config(&self) -> anyhow::Result<()> {
        for (name, provider) in &self.storage.providers {
            match &provider.jwt {
                None => anyhow::bail!("storage provider '{name}' requires a jwt credential"),
                Some(jwt) if jwt.expose_secret().is_empty() => {
                    anyhow::bail!("storage provider '{name}' has an empty jwt credential");
                }
                Some(_) => {}
            }

            if provider.gateway.is_empty() {
                anyhow::bail!("storage provider '{name}' requires a gateway host for URL resolution");
            }
        }

        Ok(())
    }
}
