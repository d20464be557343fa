//! Session-scoped display state and the flows that drive it.

use crate::error::{AggregationError, StorageError, StorageResult};
use crate::host::SharedHost;
use crate::permissions::{
    LocationSample, PermissionAggregator, PermissionKind, PermissionRecord, PermissionStore,
};
use crate::storage::SharedStorage;

/// In-memory display state for the permission screen.
///
/// Owned exclusively by the running [`Session`]; the durable copy lives
/// behind the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub record: PermissionRecord,
    pub location: Option<LocationSample>,
}

/// Outcome of a refresh whose aggregation completed.
#[derive(Debug)]
pub struct RefreshOutcome {
    /// Permissions denied after this cycle, in fixed declaration order.
    pub denied: Vec<PermissionKind>,
    /// Present when the new record could not be persisted. The in-memory
    /// state is updated regardless; durability is best-effort.
    pub storage_warning: Option<StorageError>,
}

/// Drives the permission screen: restores saved state on startup, runs
/// aggregation on user action, and writes results through the store.
pub struct Session {
    aggregator: PermissionAggregator,
    store: PermissionStore,
    state: SessionState,
}

impl Session {
    pub fn new(host: SharedHost, storage: SharedStorage) -> Self {
        Self {
            aggregator: PermissionAggregator::new(host),
            store: PermissionStore::new(storage),
            state: SessionState::default(),
        }
    }

    /// Initialize display state from the last persisted record, if any.
    /// Without one the record stays all-undetermined.
    pub async fn restore(&mut self) -> StorageResult<()> {
        if let Some(record) = self.store.load().await? {
            self.state.record = record;
        }
        Ok(())
    }

    /// One user-initiated request cycle: aggregate, replace the record
    /// wholesale, persist, and carry the location fix if one was taken.
    ///
    /// Aggregation failure leaves both the in-memory state and the
    /// persisted record untouched.
    pub async fn refresh(&mut self) -> Result<RefreshOutcome, AggregationError> {
        let aggregated = self.aggregator.request_all().await?;
        self.state.record = aggregated.record;
        self.state.location = aggregated.location;

        let storage_warning = match self.store.save(&self.state.record).await {
            Ok(()) => None,
            Err(error) => {
                tracing::warn!("permission record not persisted: {error}");
                Some(error)
            }
        };

        Ok(RefreshOutcome {
            denied: self.state.record.denied(),
            storage_warning,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Human-readable list of denied permissions, `None` when nothing is
    /// denied. Order follows [`PermissionKind::ALL`].
    pub fn denied_summary(&self) -> Option<String> {
        let denied = self.state.record.denied();
        if denied.is_empty() {
            return None;
        }
        let names: Vec<&str> = denied.iter().map(|kind| kind.as_str()).collect();
        Some(names.join(", "))
    }
}
