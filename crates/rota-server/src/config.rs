use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Path of the JSON ledger snapshot.
    pub ledger_path: PathBuf,
    /// Incoming-webhook URL for notifications; unset disables them.
    pub webhook_url: Option<String>,
    /// Seed roster names used when no snapshot exists. Empty means the
    /// built-in default roster.
    pub seed_names: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3001".parse().expect("valid default addr"),
            ledger_path: PathBuf::from("rota-ledger.json"),
            webhook_url: None,
            seed_names: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML configuration document.
    pub fn from_toml(document: &str) -> ServerResult<Self> {
        toml::from_str(document).map_err(|e| ServerError::Config(e.to_string()))
    }
}
