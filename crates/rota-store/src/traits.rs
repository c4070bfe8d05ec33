use serde_json::Value;

use crate::error::StoreResult;
use crate::snapshot::LedgerSnapshot;

/// Durable snapshot persistence.
///
/// All implementations must satisfy these invariants:
/// - `write` replaces the whole snapshot; there are no partial updates.
/// - A `write` that returns `Ok` is durable; a failed `write` must leave
///   the previous snapshot intact (no truncate-then-write windows).
/// - `read` returns the raw document so the caller can run schema
///   migration; `Ok(None)` means no snapshot has ever been written.
/// - The store never interprets the document beyond JSON framing.
pub trait SnapshotStore: Send + Sync {
    /// Read the persisted snapshot document, if any.
    fn read(&self) -> StoreResult<Option<Value>>;

    /// Serialize and persist the full snapshot, overwriting any previous one.
    fn write(&self, snapshot: &LedgerSnapshot) -> StoreResult<()>;
}
