//! # Foodbank Config
//!
//! Environment-derived configuration for the foodbank backend.
//! This crate performs no IO besides reading variables through a lookup
//! function, so every rule here can be exercised without touching the
//! process environment.
//!
//! ## Layout
//!
//! - `database` - connection string resolution and scheme normalization
//! - `pool` - connection pool parameters
//! - `cors` - allowed origins and CORS mode selection
//! - `settings` - the aggregate [`AppConfig`]
//! - `error` - configuration errors

pub mod cors;
pub mod database;
pub mod env;
pub mod error;
pub mod pool;
pub mod settings;

#[cfg(test)]
mod config_tests;

// Re-export commonly used types
pub use cors::{CorsSettings, Environment, allowed_origins};
pub use database::{
    Backend, DatabaseUrl, DatabaseUrlSource, default_database_url, normalize_scheme,
    resolve_database_url,
};
pub use error::ConfigError;
pub use pool::PoolSettings;
pub use settings::{AppConfig, DEFAULT_PORT};
