//! # Foodbank Hex
//!
//! HTTP adapter for the foodbank backend.
//!
//! ## Architecture
//!
//! - `inbound/` - Axum server, CORS policy and shared state
//!
//! The database handle is created by the binary and handed to
//! [`inbound::HttpServer`], which exposes it to handlers through `AppState`.

pub mod inbound;

pub use inbound::{AppState, HttpServer, cors_layer};
