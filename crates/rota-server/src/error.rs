use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use rota_engine::EngineError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Engine failure crossing the HTTP boundary.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub EngineError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            EngineError::NotInitialized => StatusCode::SERVICE_UNAVAILABLE,
            EngineError::InvalidAmount
            | EngineError::EmptyAttendance
            | EngineError::InvalidPayerSelection(_)
            | EngineError::InvalidCorrection(_) => StatusCode::BAD_REQUEST,
            EngineError::DuplicateName(_) | EngineError::InsufficientParticipants => {
                StatusCode::CONFLICT
            }
            EngineError::ParticipantNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.0.to_string() }));
        (self.status(), body).into_response()
    }
}
