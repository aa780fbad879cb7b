use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use shelf_store::BookStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_app;

/// Shelf book server: owns the store and serves it over HTTP.
pub struct ShelfServer {
    config: ServerConfig,
    store: Arc<BookStore>,
}

impl ShelfServer {
    /// Create a server whose store is seeded according to `config.seed`.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed {
            BookStore::with_seed_data()
        } else {
            BookStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<BookStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<BookStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        build_app(AppState::new(Arc::clone(&self.store)), &self.config)
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = self.router()?;
        let addr: SocketAddr = listener.local_addr()?;
        tracing::info!("Shelf server listening on {addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
