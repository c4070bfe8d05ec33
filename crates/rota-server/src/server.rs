use std::sync::Arc;

use tokio::net::TcpListener;

use rota_engine::{default_roster, RotationEngine};
use rota_notify::Notifier;
use rota_store::FileSnapshotStore;
use rota_types::Roster;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// Rota ledger server.
pub struct RotaServer {
    config: ServerConfig,
}

impl RotaServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the engine and notifier from the configuration and load the
    /// roster. Exposed separately so tests and the CLI can reuse it.
    pub fn build_state(&self) -> AppState {
        let store = Arc::new(FileSnapshotStore::new(&self.config.ledger_path));
        let seed = if self.config.seed_names.is_empty() {
            default_roster()
        } else {
            Roster::seeded(self.config.seed_names.iter().cloned())
        };

        let engine = Arc::new(RotationEngine::new(store, seed));
        engine.init();

        let notifier = Arc::new(Notifier::new(self.config.webhook_url.clone()));
        AppState::new(engine, notifier)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(self.build_state());
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("Rota server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
