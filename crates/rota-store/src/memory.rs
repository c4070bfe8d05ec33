use std::sync::RwLock;

use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::snapshot::LedgerSnapshot;
use crate::traits::SnapshotStore;

/// In-memory snapshot store for tests and embedding.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<Option<Value>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a raw document, e.g. a legacy snapshot for migration tests.
    pub fn with_document(value: Value) -> Self {
        Self {
            inner: RwLock::new(Some(value)),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn read(&self) -> StoreResult<Option<Value>> {
        let guard = self
            .inner
            .read()
            .map_err(|_| StoreError::Corrupt("snapshot lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn write(&self, snapshot: &LedgerSnapshot) -> StoreResult<()> {
        let value =
            serde_json::to_value(snapshot).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StoreError::Corrupt("snapshot lock poisoned".into()))?;
        *guard = Some(value);
        Ok(())
    }
}
