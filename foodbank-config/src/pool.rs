//! Connection pool parameters.
//!
//! These are handed to the driver's pool as-is; nothing here manages
//! connections.

use std::time::Duration;

use crate::ConfigError;
use crate::env::parse_or;

pub const DB_POOL_SIZE: &str = "DB_POOL_SIZE";
pub const DB_MAX_OVERFLOW: &str = "DB_MAX_OVERFLOW";
pub const DB_POOL_RECYCLE_SECS: &str = "DB_POOL_RECYCLE_SECS";
pub const DB_POOL_PRE_PING: &str = "DB_POOL_PRE_PING";

/// Pool sizing and health-check settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Connections the pool keeps around.
    pub pool_size: u32,
    /// Extra connections allowed when the pool is exhausted.
    pub max_overflow: u32,
    /// Maximum lifetime of a connection before it is replaced.
    pub recycle: Duration,
    /// Test each connection before handing it out.
    pub pre_ping: bool,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            pool_size: 10,
            max_overflow: 5,
            recycle: Duration::from_secs(300),
            pre_ping: true,
        }
    }
}

impl PoolSettings {
    /// Loads overrides from the `DB_POOL_*` variables on top of the defaults.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let settings = Self {
            pool_size: parse_or(lookup, DB_POOL_SIZE, defaults.pool_size)?,
            max_overflow: parse_or(lookup, DB_MAX_OVERFLOW, defaults.max_overflow)?,
            recycle: Duration::from_secs(parse_or(
                lookup,
                DB_POOL_RECYCLE_SECS,
                defaults.recycle.as_secs(),
            )?),
            pre_ping: parse_or(lookup, DB_POOL_PRE_PING, defaults.pre_ping)?,
        };

        // A pool must be able to open at least one connection.
        if settings.max_connections() == 0 {
            return Err(ConfigError::InvalidValue {
                key: DB_POOL_SIZE.to_string(),
                value: settings.pool_size.to_string(),
            });
        }

        Ok(settings)
    }

    /// Upper bound on open connections.
    pub fn max_connections(&self) -> u32 {
        self.pool_size.saturating_add(self.max_overflow)
    }
}
