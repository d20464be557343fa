pub mod error;
pub mod host;
pub mod permissions;
pub mod session;
pub mod storage;

pub use crate::error::{AggregationError, HostError, StorageError, StorageResult};
pub use crate::host::{default_host, Host, SharedHost};
pub use crate::permissions::{
    AggregatedPermissions, LocationSample, PermissionAggregator, PermissionKind, PermissionRecord,
    PermissionStatus, PermissionStore,
};
pub use crate::session::{RefreshOutcome, Session, SessionState};
pub use crate::storage::file::FileStorage;
pub use crate::storage::memory::MemoryStorage;
pub use crate::storage::{SharedStorage, Storage};
