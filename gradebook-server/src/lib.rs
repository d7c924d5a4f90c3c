//! gradebook-server - HTTP server for the gradebook backend.
//!
//! Exposes the REST API under `/api` and serves the embedded web UI for
//! every other path. All state lives in the three JSON documents; handlers
//! re-read them on every request.

mod error;
pub mod http;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

use gradebook_store::JsonStore;

pub use error::ServerError;
pub use http::create_router;
pub use state::AppState;

/// The main gradebook server.
pub struct GradebookServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl GradebookServer {
    /// Create a server over the data directory named in `config`.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let store = Arc::new(
            JsonStore::open(&config.data_dir)
                .map_err(|e| ServerError::Internal(e.to_string()))?,
        );
        let state = Arc::new(AppState::new(store));
        Ok(Self { config, state })
    }

    /// Create a server with custom state (for testing).
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        tracing::info!(
            "gradebook server listening on {} (data dir: {})",
            addr,
            self.config.data_dir.display()
        );

        let router = create_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the JSON documents
    pub data_dir: std::path::PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            data_dir: gradebook_paths::data_dir(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port.
    pub fn new(host: impl Into<String>, port: u16, data_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            host: host.into(),
            port,
            data_dir: data_dir.into(),
        }
    }

    /// Returns the socket address string (e.g., "0.0.0.0:5000").
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
