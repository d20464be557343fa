//! Durable store for the last-known permission record.

use crate::error::{StorageError, StorageResult};
use crate::permissions::types::PermissionRecord;
use crate::storage::SharedStorage;

/// The single durable entry owned by this crate.
pub const PERMISSIONS_KEY: &str = "permissions";

/// Persists and restores the aggregated record across process restarts.
pub struct PermissionStore {
    storage: SharedStorage,
}

impl PermissionStore {
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// The last persisted record, or `None` when nothing was written yet
    /// or the stored payload no longer matches the record schema.
    ///
    /// Malformed payloads degrade to "no prior record"; only backend
    /// unavailability is an error.
    pub async fn load(&self) -> StorageResult<Option<PermissionRecord>> {
        let value = match self.storage.read(PERMISSIONS_KEY).await {
            Ok(Some(value)) => value,
            Ok(None) => return Ok(None),
            Err(StorageError::Malformed(message)) => {
                tracing::warn!("discarding malformed permission record: {message}");
                return Ok(None);
            }
            Err(error) => return Err(error),
        };
        match serde_json::from_value(value) {
            Ok(record) => Ok(Some(record)),
            Err(error) => {
                tracing::warn!("discarding malformed permission record: {error}");
                Ok(None)
            }
        }
    }

    /// Durably persist `record`, overwriting any prior value. A `load`
    /// issued after a completed `save` observes the new value.
    pub async fn save(&self, record: &PermissionRecord) -> StorageResult<()> {
        let value = serde_json::to_value(record)
            .map_err(|error| StorageError::Serialize(error.to_string()))?;
        self.storage.write(PERMISSIONS_KEY, &value).await
    }
}
