use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{StorageError, StorageResult};
use crate::storage::{validate_key, Storage};

// Scratch files get a per-write sequence number so concurrent writers
// never share one.
static SCRATCH_SEQ: AtomicU64 = AtomicU64::new(0);

/// File-backed storage: one `<key>.json` document per key.
///
/// Writes land in a scratch sibling and are renamed into place, so a
/// completed write is atomic, concurrent writers resolve to
/// last-writer-wins, and readers never observe a torn payload.
#[derive(Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn entry_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }

    async fn ensure_root(&self) -> StorageResult<()> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|error| {
            StorageError::Io(format!(
                "failed to create storage directory {}: {error}",
                self.root.display()
            ))
        })
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn write(&self, key: &str, data: &Value) -> StorageResult<()> {
        let path = self.entry_path(key)?;
        self.ensure_root().await?;
        let serialized = serde_json::to_vec_pretty(data)
            .map_err(|error| StorageError::Serialize(error.to_string()))?;

        let seq = SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed);
        let scratch = self.root.join(format!(".{key}.json.{seq}.tmp"));
        tokio::fs::write(&scratch, serialized).await.map_err(|error| {
            StorageError::Io(format!(
                "failed to write storage file {}: {error}",
                scratch.display()
            ))
        })?;
        tokio::fs::rename(&scratch, &path).await.map_err(|error| {
            StorageError::Io(format!(
                "failed to commit storage file {}: {error}",
                path.display()
            ))
        })
    }

    async fn read(&self, key: &str) -> StorageResult<Option<Value>> {
        let path = self.entry_path(key)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(StorageError::Io(format!(
                    "failed to read storage file {}: {error}",
                    path.display()
                )))
            }
        };
        let value = serde_json::from_slice(&bytes)
            .map_err(|error| StorageError::Malformed(error.to_string()))?;
        Ok(Some(value))
    }
}
