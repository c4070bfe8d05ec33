/// Errors produced by rotation engine operations.
///
/// Validation and lookup failures are rejected before any mutation; the
/// roster is left untouched. Persistence failures are deliberately not
/// represented here — a mutation that fails to persist is kept in memory
/// and reported through the `persisted` flag on operation results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("ledger not initialized; call init() first")]
    NotInitialized,

    #[error("amount must be a finite, positive number")]
    InvalidAmount,

    #[error("attendance list is empty")]
    EmptyAttendance,

    #[error("invalid payer selection: {0}")]
    InvalidPayerSelection(String),

    #[error("invalid correction: {0}")]
    InvalidCorrection(String),

    #[error("duplicate participant name: {0:?}")]
    DuplicateName(String),

    #[error("participant not found: {0:?}")]
    ParticipantNotFound(String),

    #[error("at least two participants are required")]
    InsufficientParticipants,
}
