use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all Rota endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/roster", get(handler::roster_handler))
        .route("/v1/payments", post(handler::record_payment_handler))
        .route("/v1/corrections", post(handler::correction_handler))
        .route("/v1/participants", post(handler::add_participant_handler))
        .route(
            "/v1/participants/:name",
            delete(handler::remove_participant_handler),
        )
        .route("/v1/notify", post(handler::notify_turn_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
