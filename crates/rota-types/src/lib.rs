//! Foundation types for Rota, the fairness-ranked rotation ledger.
//!
//! This crate provides the core data model used throughout the Rota system.
//! Every other Rota crate depends on `rota-types`.
//!
//! # Key Types
//!
//! - [`Participant`] — One member of the rotation, with payment and
//!   attendance accounting and the derived fairness ratio
//! - [`Roster`] — Insertion-ordered collection of participants, keyed by
//!   unique name, with a stable fairness ranking view
//! - [`RosterError`] — Structural violations (duplicate names)

pub mod error;
pub mod participant;
pub mod roster;

pub use error::RosterError;
pub use participant::Participant;
pub use roster::Roster;
