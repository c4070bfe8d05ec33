//! Durable snapshot persistence for the Rota rotation ledger.
//!
//! This crate provides:
//! - The [`SnapshotStore`] trait boundary
//! - [`FileSnapshotStore`] with atomic-replace writes
//! - [`InMemorySnapshotStore`] for tests and embedding
//! - The versioned snapshot document and its one-shot schema migration
//! - [`load_or_seed`] / [`save_roster`]: the load-on-start and
//!   write-after-mutate discipline

pub mod error;
pub mod file;
pub mod load;
pub mod memory;
pub mod snapshot;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileSnapshotStore;
pub use load::{load_or_seed, save_roster};
pub use memory::InMemorySnapshotStore;
pub use snapshot::{decode, LedgerSnapshot, SCHEMA_VERSION};
pub use traits::SnapshotStore;
