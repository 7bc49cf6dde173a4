use std::sync::Arc;

use tokio::net::TcpListener;

use sheetd_store::JsonFileStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::{build_router, AppState};

/// The sheetd HTTP server.
pub struct SheetServer {
    config: ServerConfig,
}

impl SheetServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router over the configured backing file (useful for testing).
    pub fn router(&self) -> axum::Router {
        let store = Arc::new(JsonFileStore::new(self.config.data_path.clone()));
        build_router(AppState::new(store))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            addr = %self.config.bind_addr,
            data_path = %self.config.data_path.display(),
            "sheetd server listening"
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
