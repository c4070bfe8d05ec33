//! HTTP transport for the Rota rotation ledger.
//!
//! Exposes the rotation engine's operations as REST endpoints and fans
//! successful payments out to the webhook notifier on detached tasks. The
//! transport holds no state of its own; the engine owns the roster and the
//! notifier owns delivery.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use handler::AppState;
pub use router::build_router;
pub use server::RotaServer;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use rota_engine::RotationEngine;
    use rota_notify::Notifier;
    use rota_store::InMemorySnapshotStore;
    use rota_types::Roster;

    fn test_app() -> axum::Router {
        let engine = Arc::new(RotationEngine::new(
            Arc::new(InMemorySnapshotStore::new()),
            Roster::seeded(["A", "B", "C"]),
        ));
        engine.init();
        let notifier = Arc::new(Notifier::new(None));
        build_router(AppState::new(engine, notifier))
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn roster_returns_seeded_ranking() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/v1/roster")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let names: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn payment_mutates_and_returns_new_ranking() {
        let app = test_app();
        let request = json_request(
            Method::POST,
            "/v1/payments",
            json!({ "amount": 100.0, "attendees": ["A", "B", "C"], "payers": ["A", "B"] }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["payers"], json!(["A", "B"]));
        assert_eq!(body["next_to_pay"][0], "C");
        assert_eq!(body["persisted"], true);
    }

    #[tokio::test]
    async fn invalid_payment_is_bad_request() {
        let request = json_request(
            Method::POST,
            "/v1/payments",
            json!({ "amount": -5.0, "attendees": ["A"], "payers": ["A", "B"] }),
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("amount"));
    }

    #[tokio::test]
    async fn single_payer_is_bad_request() {
        let request = json_request(
            Method::POST,
            "/v1/payments",
            json!({ "amount": 50.0, "attendees": ["A"], "payers": ["A"] }),
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn correction_applies_overwrite() {
        let request = json_request(
            Method::POST,
            "/v1/corrections",
            json!({ "name": "A", "total_paid": 200.0, "payment_count": 4, "attendance_count": 8 }),
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let a = body["ranking"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == "A")
            .unwrap();
        assert_eq!(a["fairness_ratio"], 25.0);
    }

    #[tokio::test]
    async fn duplicate_participant_is_conflict() {
        let request = json_request(Method::POST, "/v1/participants", json!({ "name": "A" }));
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn add_and_remove_participant() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/v1/participants",
                json!({ "name": "Z" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/v1/participants/Z")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn remove_unknown_participant_is_not_found() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/v1/participants/Nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn notify_reports_next_to_pay() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/v1/notify")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["next_to_pay"], json!(["A", "B"]));
    }
}
