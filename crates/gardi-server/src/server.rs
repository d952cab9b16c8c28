use std::sync::Arc;

use tokio::net::TcpListener;

use gardi_store::FsDocumentStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Gardi document server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Open the store and build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        let store = Arc::new(FsDocumentStore::open(&self.config.data_root)?);
        Ok(build_router(store, self.config.allow_any_origin))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            "document server listening on {} (data root: {})",
            self.config.bind_addr,
            self.config.data_root.display()
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
