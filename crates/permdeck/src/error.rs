use std::fmt;

use crate::permissions::PermissionKind;

/// Error raised by a host adapter when a call fails outside the normal
/// grant/deny flow.
#[derive(Debug, Clone)]
pub struct HostError(pub String);

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for HostError {}

/// Error raised when a permission request itself fails.
///
/// A platform-reported denial is not an error; this covers the host call
/// failing unexpectedly. No partial record is exposed when this happens.
#[derive(Debug, Clone)]
pub struct AggregationError {
    pub permission: PermissionKind,
    pub message: String,
}

impl AggregationError {
    pub(crate) fn new(permission: PermissionKind, error: HostError) -> Self {
        Self {
            permission,
            message: error.0,
        }
    }
}

impl fmt::Display for AggregationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "permission request for {} failed: {}",
            self.permission, self.message
        )
    }
}

impl std::error::Error for AggregationError {}

/// Unified error type for the storage layer.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// A storage key was empty or contained path separators.
    InvalidKey(String),
    /// The backend could not be read or written.
    Io(String),
    /// The stored payload could not be parsed.
    Malformed(String),
    /// The value could not be serialized.
    Serialize(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidKey(key) => write!(f, "invalid storage key {key}"),
            StorageError::Io(msg) => write!(f, "storage io error: {msg}"),
            StorageError::Malformed(msg) => write!(f, "malformed stored payload: {msg}"),
            StorageError::Serialize(msg) => write!(f, "storage serialize error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type alias using [`StorageError`].
pub type StorageResult<T> = Result<T, StorageError>;
