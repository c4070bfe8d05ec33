use tracing::{info, warn};

use rota_types::Roster;

use crate::snapshot::{decode, LedgerSnapshot};
use crate::traits::SnapshotStore;

/// Load the roster from the store, falling back to the seed.
///
/// Never fails: absent, unreadable, or structurally invalid snapshots are
/// replaced by the seed roster, which is persisted immediately so subsequent
/// reads are stable. A snapshot that needed schema migration is rewritten
/// once, synchronously, before the roster is returned.
pub fn load_or_seed(store: &dyn SnapshotStore, seed: Roster) -> Roster {
    let value = match store.read() {
        Ok(Some(value)) => value,
        Ok(None) => {
            info!("no snapshot found; seeding roster");
            return seed_and_persist(store, seed);
        }
        Err(e) => {
            warn!(error = %e, "failed to read snapshot; seeding roster");
            return seed_and_persist(store, seed);
        }
    };

    let (snapshot, migrated) = match decode(value) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(error = %e, "corrupt snapshot; seeding roster");
            return seed_and_persist(store, seed);
        }
    };

    if migrated {
        if let Err(e) = store.write(&snapshot) {
            warn!(error = %e, "failed to rewrite migrated snapshot");
        } else {
            info!("snapshot migrated and rewritten");
        }
    }

    match snapshot.into_roster() {
        Ok(roster) => roster,
        Err(e) => {
            warn!(error = %e, "snapshot failed roster invariants; seeding roster");
            seed_and_persist(store, seed)
        }
    }
}

/// Persist the roster, best-effort. Returns whether the write succeeded.
///
/// A failed write is logged and reported, never escalated: the in-memory
/// roster stays authoritative for the rest of the process lifetime.
pub fn save_roster(store: &dyn SnapshotStore, roster: &Roster) -> bool {
    let snapshot = LedgerSnapshot::from_roster(roster);
    match store.write(&snapshot) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "failed to persist snapshot; in-memory state remains authoritative");
            false
        }
    }
}

fn seed_and_persist(store: &dyn SnapshotStore, seed: Roster) -> Roster {
    save_roster(store, &seed);
    seed
}
