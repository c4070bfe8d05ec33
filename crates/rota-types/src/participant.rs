use serde::{Deserialize, Serialize};

/// One member of the payment rotation.
///
/// `name` is the primary key: unique within a roster, case-sensitive, and
/// never normalized. The three source fields (`payment_count`, `total_paid`,
/// `attendance_count`) drive the derived `fairness_ratio`; the ratio must be
/// recomputed whenever any of them changes and is never set independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique, stable identifier.
    pub name: String,
    /// Number of times this participant has paid.
    pub payment_count: u32,
    /// Cumulative currency contributed.
    pub total_paid: f64,
    /// Number of recorded sessions this participant attended.
    pub attendance_count: u32,
    /// Derived: `total_paid / attendance_count`, or 0 when never attended.
    /// Persisted redundantly as a cache; recomputable from the fields above.
    pub fairness_ratio: f64,
}

impl Participant {
    /// A fresh participant with all accounting fields zeroed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payment_count: 0,
            total_paid: 0.0,
            attendance_count: 0,
            fairness_ratio: 0.0,
        }
    }

    /// Recompute the fairness ratio from its source fields.
    ///
    /// Lower means "paid less relative to presence" and therefore ranks
    /// earlier in the rotation.
    pub fn recompute_ratio(&mut self) {
        self.fairness_ratio = if self.attendance_count > 0 {
            self.total_paid / f64::from(self.attendance_count)
        } else {
            0.0
        };
    }

    /// Credit this participant's half of a recorded payment.
    pub fn record_share(&mut self, share: f64) {
        self.payment_count += 1;
        self.total_paid += share;
        self.recompute_ratio();
    }

    /// Record presence at a session.
    pub fn record_attendance(&mut self) {
        self.attendance_count += 1;
        self.recompute_ratio();
    }

    /// Administrative overwrite of all three source fields.
    ///
    /// The only path that may set the accounting to arbitrary values; the
    /// ratio is recomputed in the same operation so it can never drift.
    pub fn overwrite(&mut self, total_paid: f64, payment_count: u32, attendance_count: u32) {
        self.total_paid = total_paid;
        self.payment_count = payment_count;
        self.attendance_count = attendance_count;
        self.recompute_ratio();
    }
}
