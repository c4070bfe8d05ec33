use thiserror::Error;

/// Errors produced by snapshot store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupt snapshot: {0}")]
    Corrupt(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
