//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use foodbank_config::CorsSettings;
use foodbank_db::Database;

use super::cors::cors_layer;
use super::handlers::{self, AppState};

/// HTTP Server for the foodbank API.
pub struct HttpServer {
    state: Arc<AppState>,
    cors: CorsSettings,
}

impl HttpServer {
    /// Creates a new HTTP server bound to the given database.
    pub fn new(database: Database, cors: CorsSettings) -> Self {
        Self {
            state: Arc::new(AppState {
                database,
                environment: cors.environment,
            }),
            cors,
        }
    }

    /// Returns the shared handler state.
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Builds the Axum router.
    ///
    /// The CORS layer wraps only the `/api` subtree, including its fallback.
    pub fn router(&self) -> Router {
        let api = Router::new()
            .route("/status", get(handlers::status))
            .fallback(handlers::not_found)
            .layer(cors_layer(&self.cors));

        Router::new()
            .route("/health", get(handlers::health))
            .nest("/api", api)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.state.database.close().await;
        tracing::info!("Database pool closed");

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
