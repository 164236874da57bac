//! Cross-origin settings.
//!
//! Two modes exist. In production only the assembled origin list may call
//! the API; everywhere else any origin may.

use serde::Serialize;

use crate::env::non_empty;

/// Environment flag selecting the CORS mode.
pub const FLASK_ENV: &str = "FLASK_ENV";
/// Deployed frontend origin, appended to the local development origins.
pub const FRONTEND_URL: &str = "FRONTEND_URL";

/// Origins of the local frontend dev server.
pub const LOCAL_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// Only the exact value `"production"` selects production.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Builds the ordered allowed-origins list, dropping empty entries.
pub fn allowed_origins<F>(lookup: &F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCAL_ORIGINS
        .iter()
        .map(|origin| origin.to_string())
        .chain(non_empty(lookup, FRONTEND_URL))
        .filter(|origin| !origin.is_empty())
        .collect()
}

/// CORS mode plus the origins honoured in restrictive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsSettings {
    pub environment: Environment,
    pub allowed_origins: Vec<String>,
}

impl CorsSettings {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: Environment::from_flag(lookup(FLASK_ENV).as_deref()),
            allowed_origins: allowed_origins(lookup),
        }
    }

    /// True when cross-origin access is limited to `allowed_origins`.
    pub fn is_restrictive(&self) -> bool {
        self.environment.is_production()
    }
}
