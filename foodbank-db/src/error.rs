//! Database errors.

use foodbank_config::{Backend, ConfigError};

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database backend not enabled in this build: {0}")]
    BackendDisabled(Backend),
}
