//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server. Everything under `/api` is subject to the
//! configured CORS policy.

mod cors;
mod handlers;
mod server;

pub use cors::cors_layer;
pub use handlers::AppState;
pub use server::HttpServer;
