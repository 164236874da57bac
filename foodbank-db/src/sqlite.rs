//! SQLite pool.
#![allow(clippy::collapsible_if)]

use std::str::FromStr;

use foodbank_config::PoolSettings;
use sqlx::SqlitePool;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions};

use crate::{DbError, pool_options};

/// Opens a SQLite pool, creating the database file if missing.
pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<SqlitePool, DbError> {
    // Ensure on-disk SQLite target directory exists (no-op for in-memory).
    if let Some(path) = database_url.strip_prefix("sqlite://") {
        // Remove query parameters
        let path = path.split('?').next().unwrap_or(path);
        if path != ":memory:" {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = pool_options::<Sqlite>(settings)
        .connect_with(options)
        .await?;

    Ok(pool)
}
