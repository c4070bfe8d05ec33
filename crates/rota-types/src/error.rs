/// Structural violations of the roster data model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("duplicate participant name: {0:?}")]
    DuplicateName(String),
}
