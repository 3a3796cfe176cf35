use std::sync::Arc;

use storage::{Group, StorageProvider};

use crate::error::{Result, VaultError};

/// Find-or-create service for the public storage group
///
/// The storage backend does not enforce uniqueness by name, so the first
/// public group with an exact name match is treated as canonical and any
/// duplicates are ignored. No lock is taken across the list/create pair;
/// concurrent calls with the same absent name can create duplicates.
pub struct GroupBootstrap {
    storage: Arc<dyn StorageProvider>,
}

impl GroupBootstrap {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    /// Name used when the caller does not supply one
    pub fn default_group_name(&self) -> &str {
        self.storage.public_group_name()
    }

    /// Return the existing public group with this name, or create one
    ///
    /// Matching is exact and case-sensitive. Sequentially idempotent:
    /// a second call with the same name returns the group the first
    /// call produced.
    pub async fn ensure_public_group(&self, name: Option<&str>) -> Result<Group> {
        let name = name.unwrap_or_else(|| self.storage.public_group_name());

        let groups = self.storage.list_groups(true).await.map_err(VaultError::Group)?;

        if let Some(existing) = groups.into_iter().find(|group| group.name == name && group.is_public) {
            tracing::debug!(group_id = %existing.id, group_name = %name, "found existing public group");
            return Ok(existing);
        }

        let created = self.storage.create_group(name, true).await.map_err(VaultError::Group)?;

        tracing::info!(group_id = %created.id, group_name = %name, "created public group");

        Ok(created)
    }
}
