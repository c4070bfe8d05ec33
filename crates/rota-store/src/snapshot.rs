use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use rota_types::{Participant, Roster};

use crate::error::{StoreError, StoreResult};

/// Current snapshot schema version.
///
/// v1 predates attendance tracking: its records carry only `name`,
/// `payment_count`, and `total_paid`. v2 adds `attendance_count` and the
/// cached `fairness_ratio`.
pub const SCHEMA_VERSION: u32 = 2;

/// The complete persisted representation of a roster at a point in time.
///
/// Participants are stored in insertion order. `fairness_ratio` is written
/// redundantly as a cache and recomputed from the source fields on load; it
/// is never a second source of truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub schema_version: u32,
    pub participants: Vec<Participant>,
}

impl LedgerSnapshot {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            participants: roster.iter().cloned().collect(),
        }
    }

    /// Rebuild the roster, rejecting structurally invalid documents.
    pub fn into_roster(self) -> StoreResult<Roster> {
        let mut roster = Roster::from_participants(self.participants)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        // The persisted ratio is disposable; derive it fresh.
        roster.recompute_ratios();
        Ok(roster)
    }
}

fn default_version() -> u32 {
    1
}

/// A participant record as found on disk, tolerant of the v1 shape.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    payment_count: u32,
    total_paid: f64,
    attendance_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default = "default_version")]
    schema_version: u32,
    participants: Vec<RawRecord>,
}

/// Decode a raw snapshot document, applying the versioned migration path.
///
/// Returns the snapshot and whether migration changed it (in which case the
/// caller must rewrite the store once before serving from it). Documents
/// with an unknown future version are rejected as corrupt rather than
/// guessed at.
pub fn decode(value: Value) -> StoreResult<(LedgerSnapshot, bool)> {
    let doc: RawDocument =
        serde_json::from_value(value).map_err(|e| StoreError::Corrupt(e.to_string()))?;

    if doc.schema_version > SCHEMA_VERSION {
        return Err(StoreError::Corrupt(format!(
            "unsupported schema version {}",
            doc.schema_version
        )));
    }

    let mut migrated = false;
    let mut participants = Vec::with_capacity(doc.participants.len());
    for raw in doc.participants {
        // Amounts must be finite and non-negative; anything else cannot have
        // come from a valid write.
        if !raw.total_paid.is_finite() || raw.total_paid < 0.0 {
            return Err(StoreError::Corrupt(format!(
                "participant {:?} has invalid total_paid {}",
                raw.name, raw.total_paid
            )));
        }

        // v1 records carry no attendance; seed it from the payment count
        // so existing ratios stay meaningful.
        let attendance_count = match raw.attendance_count {
            Some(count) => count,
            None => {
                migrated = true;
                raw.payment_count
            }
        };
        let mut p = Participant {
            name: raw.name,
            payment_count: raw.payment_count,
            total_paid: raw.total_paid,
            attendance_count,
            fairness_ratio: 0.0,
        };
        p.recompute_ratio();
        participants.push(p);
    }

    if doc.schema_version < SCHEMA_VERSION {
        migrated = true;
    }
    if migrated {
        debug!(from = doc.schema_version, to = SCHEMA_VERSION, "migrated snapshot schema");
    }

    Ok((
        LedgerSnapshot {
            schema_version: SCHEMA_VERSION,
            participants,
        },
        migrated,
    ))
}
