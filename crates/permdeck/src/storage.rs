pub mod file;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{StorageError, StorageResult};

/// Durable key-value storage for JSON payloads.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn write(&self, key: &str, data: &Value) -> StorageResult<()>;
    async fn read(&self, key: &str) -> StorageResult<Option<Value>>;
}

pub type SharedStorage = Arc<dyn Storage>;

pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() || key == "." || key == ".." {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    if key.contains('/') || key.contains('\\') {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
