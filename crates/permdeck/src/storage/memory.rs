use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{StorageError, StorageResult};
use crate::storage::{validate_key, Storage};

/// In-memory storage backend for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn write(&self, key: &str, data: &Value) -> StorageResult<()> {
        validate_key(key)?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Io("storage lock poisoned".to_string()))?;
        entries.insert(key.to_string(), data.clone());
        Ok(())
    }

    async fn read(&self, key: &str) -> StorageResult<Option<Value>> {
        validate_key(key)?;
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Io("storage lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn read_missing_returns_none() {
        let storage = MemoryStorage::new();
        assert!(storage.read("nothing").await.expect("read").is_none());
    }

    #[tokio::test]
    async fn write_then_read() {
        let storage = MemoryStorage::new();
        storage
            .write("entry", &json!({ "ok": true }))
            .await
            .expect("write");
        let loaded = storage.read("entry").await.expect("read").expect("value");
        assert_eq!(loaded, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn write_overwrites_prior_value() {
        let storage = MemoryStorage::new();
        storage.write("entry", &json!(1)).await.expect("first");
        storage.write("entry", &json!(2)).await.expect("second");
        assert_eq!(
            storage.read("entry").await.expect("read"),
            Some(json!(2))
        );
    }
}
