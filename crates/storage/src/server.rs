use async_trait::async_trait;
use secrecy::SecretString;
use voicevault_config::{StorageProviderConfig, StorageProviderType};

use crate::{
    error::StorageError,
    provider::{StorageProvider, pinata::PinataProvider},
    types::{FileListPage, FileListQuery, FileUpload, Group, StoredFile},
};

/// Storage server that routes requests to the configured provider
pub struct Server {
    providers: Vec<Box<dyn StorageProvider>>,
}

impl Server {
    fn provider(&self) -> crate::error::Result<&dyn StorageProvider> {
        self.providers
            .first()
            .map(AsRef::as_ref)
            .ok_or_else(|| StorageError::ConfigError("No storage providers configured".to_string()))
    }
}

// Delegation to the first configured provider; the orchestrator holds
// the server behind the provider trait so tests can substitute a double
#[async_trait]
impl StorageProvider for Server {
    async fn list_groups(&self, is_public: bool) -> crate::error::Result<Vec<Group>> {
        self.provider()?.list_groups(is_public).await
    }

    async fn create_group(&self, name: &str, is_public: bool) -> crate::error::Result<Group> {
        self.provider()?.create_group(name, is_public).await
    }

    async fn upload_file(&self, upload: FileUpload) -> crate::error::Result<StoredFile> {
        self.provider()?.upload_file(upload).await
    }

    async fn list_files(&self, query: &FileListQuery) -> crate::error::Result<FileListPage> {
        self.provider()?.list_files(query).await
    }

    fn file_url(&self, cid: &str) -> String {
        self.providers.first().map(|p| p.file_url(cid)).unwrap_or_default()
    }

    fn public_group_name(&self) -> &str {
        self.providers.first().map_or("", |p| p.public_group_name())
    }

    fn name(&self) -> &str {
        "storage"
    }
}

/// Builder for constructing the storage server from configuration
pub struct StorageServerBuilder<'a> {
    config: &'a voicevault_config::Config,
}

impl<'a> StorageServerBuilder<'a> {
    pub const fn new(config: &'a voicevault_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let mut providers: Vec<Box<dyn StorageProvider>> = Vec::new();

        for (name, provider_config) in &self.config.storage.providers {
            tracing::debug!("Initializing storage provider: {name}");

            let provider: Box<dyn StorageProvider> = match &provider_config.provider_type {
                StorageProviderType::Pinata => {
                    let jwt = resolve_jwt(name, provider_config)?;

                    Box::new(PinataProvider::new(
                        name.clone(),
                        jwt,
                        provider_config.gateway.clone(),
                        provider_config.api_base_url.clone(),
                        provider_config.upload_base_url.clone(),
                        provider_config.public_group_name.clone(),
                    ))
                }
            };

            providers.push(provider);
        }

        if providers.is_empty() {
            tracing::debug!("No storage providers configured");
        } else {
            tracing::debug!("Storage server initialized with {} provider(s)", providers.len());
        }

        Ok(Server { providers })
    }
}

fn resolve_jwt(name: &str, config: &StorageProviderConfig) -> crate::error::Result<SecretString> {
    config
        .jwt
        .clone()
        .ok_or_else(|| StorageError::ConfigError(format!("JWT credential required for storage provider '{name}'")))
}
