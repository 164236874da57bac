//! Aggregate application configuration.

use std::path::{Path, PathBuf};

use crate::env::{parse_or, process_env};
use crate::{ConfigError, CorsSettings, DatabaseUrl, PoolSettings, resolve_database_url};

/// Listening port variable.
pub const PORT: &str = "PORT";
/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Everything the process needs to start, built once by the entry point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `.env` and the default database file.
    pub base_dir: PathBuf,
    pub port: u16,
    pub database_url: DatabaseUrl,
    pub pool: PoolSettings,
    pub cors: CorsSettings,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env(base_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env, base_dir)
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: &F, base_dir: impl AsRef<Path>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = base_dir.as_ref().to_path_buf();
        let port = parse_or(lookup, PORT, DEFAULT_PORT)?;
        let database_url = resolve_database_url(lookup, &base_dir);
        database_url.backend()?;

        Ok(Self {
            port,
            database_url,
            pool: PoolSettings::from_lookup(lookup)?,
            cors: CorsSettings::from_lookup(lookup),
            base_dir,
        })
    }
}
