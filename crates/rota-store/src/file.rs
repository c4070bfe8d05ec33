use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::snapshot::LedgerSnapshot;
use crate::traits::SnapshotStore;

/// JSON file snapshot store.
///
/// Writes go through a temp file in the snapshot's directory followed by an
/// atomic rename, so a crash mid-write can never leave a truncated document
/// behind — the previous snapshot survives until the new one is complete.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self) -> StoreResult<Option<Value>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Some(value))
    }

    fn write(&self, snapshot: &LedgerSnapshot) -> StoreResult<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let encoded = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        // Temp file must live on the same filesystem for the rename to be atomic.
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(&encoded)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        debug!(path = %self.path.display(), bytes = encoded.len(), "snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_types::Roster;

    #[test]
    fn missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("ledger.json"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("ledger.json"));

        let snapshot = LedgerSnapshot::from_roster(&Roster::seeded(["A", "B"]));
        store.write(&snapshot).unwrap();

        let value = store.read().unwrap().unwrap();
        let decoded: LedgerSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn write_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("nested/deep/ledger.json"));
        let snapshot = LedgerSnapshot::from_roster(&Roster::seeded(["A"]));
        store.write(&snapshot).unwrap();
        assert!(store.read().unwrap().is_some());
    }

    #[test]
    fn overwrite_replaces_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("ledger.json"));

        store
            .write(&LedgerSnapshot::from_roster(&Roster::seeded(["A", "B", "C"])))
            .unwrap();
        store
            .write(&LedgerSnapshot::from_roster(&Roster::seeded(["A"])))
            .unwrap();

        let value = store.read().unwrap().unwrap();
        let decoded: LedgerSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.participants.len(), 1);
    }

    #[test]
    fn garbage_file_is_corrupt_not_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, b"not json {").unwrap();

        let store = FileSnapshotStore::new(&path);
        let err = store.read().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}
