use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use rota_engine::{MutationOutcome, PaymentRecorded, RotationEngine};
use rota_notify::Notifier;
use rota_types::Participant;

use crate::error::ApiError;

/// Shared handler state: the engine and the notification collaborator.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RotationEngine>,
    pub notifier: Arc<Notifier>,
}

impl AppState {
    pub fn new(engine: Arc<RotationEngine>, notifier: Arc<Notifier>) -> Self {
        Self { engine, notifier }
    }
}

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub amount: f64,
    pub attendees: Vec<String>,
    pub payers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CorrectionRequest {
    pub name: String,
    pub total_paid: f64,
    pub payment_count: u32,
    pub attendance_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct AddParticipantRequest {
    pub name: String,
}

/// Liveness check.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

/// Current fairness ranking; first entry pays next.
pub async fn roster_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Participant>>, ApiError> {
    Ok(Json(state.engine.rank()?))
}

/// Record a payment, then announce it on a detached task.
///
/// The notification is fire-and-forget: its failure can never affect the
/// response already computed here.
pub async fn record_payment_handler(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentRecorded>, ApiError> {
    let outcome = state
        .engine
        .record_payment(request.amount, &request.attendees, &request.payers)?;

    let notifier = state.notifier.clone();
    let announced = outcome.clone();
    tokio::spawn(async move {
        notifier.notify_payment(&announced).await;
    });

    Ok(Json(outcome))
}

/// Administrative overwrite of one participant's accounting.
pub async fn correction_handler(
    State(state): State<AppState>,
    Json(request): Json<CorrectionRequest>,
) -> Result<Json<MutationOutcome>, ApiError> {
    let outcome = state.engine.apply_correction(
        &request.name,
        request.total_paid,
        request.payment_count,
        request.attendance_count,
    )?;
    Ok(Json(outcome))
}

pub async fn add_participant_handler(
    State(state): State<AppState>,
    Json(request): Json<AddParticipantRequest>,
) -> Result<Json<MutationOutcome>, ApiError> {
    Ok(Json(state.engine.add_participant(&request.name)?))
}

pub async fn remove_participant_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MutationOutcome>, ApiError> {
    Ok(Json(state.engine.remove_participant(&name)?))
}

/// Re-announce whose turn is next, without mutating anything.
pub async fn notify_turn_handler(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let ranking = state.engine.rank()?;
    let next_to_pay: Vec<String> = ranking.iter().take(2).map(|p| p.name.clone()).collect();

    let notifier = state.notifier.clone();
    let names = next_to_pay.clone();
    tokio::spawn(async move {
        notifier.notify_turn(&names).await;
    });

    Ok(Json(json!({ "next_to_pay": next_to_pay })))
}
