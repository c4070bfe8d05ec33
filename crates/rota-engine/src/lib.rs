//! Rotation engine for Rota, the fairness-ranked rotation ledger.
//!
//! This crate is the heart of Rota. It provides:
//! - [`RotationEngine`]: the in-memory roster behind a single-writer lock
//! - The fairness ranking view (`rank`)
//! - The mutation operations: record payment, manual correction,
//!   add/remove participant
//! - Typed failures ([`EngineError`]) and degraded-mode persistence
//!   reporting ([`PaymentRecorded::persisted`])
//! - The default seed roster

pub mod engine;
pub mod error;
pub mod seed;

pub use engine::{MutationOutcome, PaymentRecorded, RotationEngine};
pub use error::EngineError;
pub use seed::{default_roster, DEFAULT_PARTICIPANTS};
