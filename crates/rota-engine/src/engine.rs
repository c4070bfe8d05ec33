use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::{info, warn};

use rota_store::{load_or_seed, save_roster, SnapshotStore};
use rota_types::{Participant, Roster};

use crate::error::EngineError;

/// Result of a successful `record_payment`.
///
/// Carries everything the notification collaborator needs: who paid, how
/// much, and who is next up in the fresh ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentRecorded {
    /// The two participants who split the payment.
    pub payers: [String; 2],
    /// Total amount paid (split evenly between the payers).
    pub amount: f64,
    /// Top of the new ranking: the next one or two to pay.
    pub next_to_pay: Vec<String>,
    /// The full fairness ranking after the mutation.
    pub ranking: Vec<Participant>,
    /// Whether the snapshot write succeeded. `false` means the mutation is
    /// held in memory only until a later write succeeds.
    pub persisted: bool,
}

/// Result of a mutation that returns just the fresh ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MutationOutcome {
    pub ranking: Vec<Participant>,
    pub persisted: bool,
}

/// The rotation engine: owns the in-memory roster and every operation that
/// changes it.
///
/// All mutations serialize through one lock held for the full mutate+persist
/// span, so the durable snapshot after operation N always reflects exactly
/// operations 1..N — no lost updates, no interleaved writes. The roster
/// starts unloaded; every operation fails with [`EngineError::NotInitialized`]
/// until [`RotationEngine::init`] has run.
pub struct RotationEngine {
    store: Arc<dyn SnapshotStore>,
    seed: Roster,
    roster: Mutex<Option<Roster>>,
}

impl RotationEngine {
    /// An engine in the "not yet loaded" state.
    pub fn new(store: Arc<dyn SnapshotStore>, seed: Roster) -> Self {
        Self {
            store,
            seed,
            roster: Mutex::new(None),
        }
    }

    /// Load the roster from the store (seeding on absence or corruption).
    ///
    /// Idempotent: a second call leaves the already-loaded roster alone.
    pub fn init(&self) -> Vec<Participant> {
        let mut guard = self.lock();
        if guard.is_none() {
            let roster = load_or_seed(self.store.as_ref(), self.seed.clone());
            info!(participants = roster.len(), "roster loaded");
            *guard = Some(roster);
        }
        guard.as_ref().map(Roster::ranked).unwrap_or_default()
    }

    /// The current fairness ranking, lowest ratio first ("pays next").
    ///
    /// A view recomputed on every call; canonical roster order is untouched.
    pub fn rank(&self) -> Result<Vec<Participant>, EngineError> {
        let guard = self.lock();
        let roster = guard.as_ref().ok_or(EngineError::NotInitialized)?;
        Ok(roster.ranked())
    }

    /// Record a payment split evenly between exactly two payers, along with
    /// the attendance of everyone present.
    ///
    /// Payers are caller-supplied rather than derived from the ranking, so a
    /// participant paying out of turn cannot corrupt the accounting: the
    /// books follow who actually paid.
    pub fn record_payment(
        &self,
        amount: f64,
        attendees: &[String],
        payers: &[String],
    ) -> Result<PaymentRecorded, EngineError> {
        let mut guard = self.lock();
        let roster = guard.as_mut().ok_or(EngineError::NotInitialized)?;

        // All validation happens before any mutation.
        if !amount.is_finite() || amount <= 0.0 {
            return Err(EngineError::InvalidAmount);
        }
        if attendees.is_empty() {
            return Err(EngineError::EmptyAttendance);
        }
        if roster.len() < 2 {
            return Err(EngineError::InsufficientParticipants);
        }
        if payers.len() != 2 {
            return Err(EngineError::InvalidPayerSelection(format!(
                "expected exactly 2 payers, got {}",
                payers.len()
            )));
        }
        if payers[0] == payers[1] {
            return Err(EngineError::InvalidPayerSelection(
                "payers must be two distinct participants".into(),
            ));
        }
        for payer in payers {
            if !roster.contains(payer) {
                return Err(EngineError::InvalidPayerSelection(format!(
                    "unknown payer {payer:?}"
                )));
            }
        }

        let share = amount / 2.0;
        for payer in payers {
            // Resolved above; the lock guarantees nothing changed since.
            if let Some(p) = roster.get_mut(payer) {
                p.record_share(share);
            }
        }
        // Attendance is a set: a name listed twice still attends once.
        let mut seen = HashSet::new();
        for attendee in attendees {
            if !seen.insert(attendee.as_str()) {
                continue;
            }
            match roster.get_mut(attendee) {
                Some(p) => p.record_attendance(),
                None => warn!(name = %attendee, "unknown attendee ignored"),
            }
        }

        let persisted = save_roster(self.store.as_ref(), roster);
        let ranking = roster.ranked();
        let next_to_pay = ranking.iter().take(2).map(|p| p.name.clone()).collect();

        Ok(PaymentRecorded {
            payers: [payers[0].clone(), payers[1].clone()],
            amount,
            next_to_pay,
            ranking,
            persisted,
        })
    }

    /// Administrative overwrite of one participant's source fields, used to
    /// fix data-entry mistakes. The fairness ratio is recomputed in the same
    /// operation.
    pub fn apply_correction(
        &self,
        name: &str,
        total_paid: f64,
        payment_count: u32,
        attendance_count: u32,
    ) -> Result<MutationOutcome, EngineError> {
        let mut guard = self.lock();
        let roster = guard.as_mut().ok_or(EngineError::NotInitialized)?;

        if !total_paid.is_finite() || total_paid < 0.0 {
            return Err(EngineError::InvalidCorrection(
                "total paid must be a finite, non-negative number".into(),
            ));
        }

        let participant = roster
            .get_mut(name)
            .ok_or_else(|| EngineError::ParticipantNotFound(name.to_string()))?;
        participant.overwrite(total_paid, payment_count, attendance_count);
        info!(name, total_paid, payment_count, attendance_count, "manual correction applied");

        let persisted = save_roster(self.store.as_ref(), roster);
        Ok(MutationOutcome {
            ranking: roster.ranked(),
            persisted,
        })
    }

    /// Add a participant with all accounting fields zeroed.
    pub fn add_participant(&self, name: &str) -> Result<MutationOutcome, EngineError> {
        let mut guard = self.lock();
        let roster = guard.as_mut().ok_or(EngineError::NotInitialized)?;

        if name.is_empty() || roster.contains(name) {
            return Err(EngineError::DuplicateName(name.to_string()));
        }
        roster
            .insert(Participant::new(name))
            .map_err(|_| EngineError::DuplicateName(name.to_string()))?;
        info!(name, "participant added");

        let persisted = save_roster(self.store.as_ref(), roster);
        Ok(MutationOutcome {
            ranking: roster.ranked(),
            persisted,
        })
    }

    /// Remove a participant. Other participants' stats are not re-balanced.
    pub fn remove_participant(&self, name: &str) -> Result<MutationOutcome, EngineError> {
        let mut guard = self.lock();
        let roster = guard.as_mut().ok_or(EngineError::NotInitialized)?;

        roster
            .remove(name)
            .ok_or_else(|| EngineError::ParticipantNotFound(name.to_string()))?;
        info!(name, "participant removed");

        let persisted = save_roster(self.store.as_ref(), roster);
        Ok(MutationOutcome {
            ranking: roster.ranked(),
            persisted,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Option<Roster>> {
        // Operations validate before they mutate, so a panic while the lock
        // was held cannot leave a half-applied roster; recover the guard
        // rather than propagating the panic.
        self.roster
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
