//! Database connection string resolution.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use url::Url;

use crate::ConfigError;
use crate::env::non_empty;

/// Primary connection string variable.
pub const DATABASE_URL: &str = "DATABASE_URL";
/// Fallback connection string variable.
pub const SQLALCHEMY_DATABASE_URI: &str = "SQLALCHEMY_DATABASE_URI";
/// File name of the local SQLite database used when nothing is configured.
pub const DEFAULT_DATABASE_FILE: &str = "foodbankdb.db";

const LEGACY_POSTGRES_PREFIX: &str = "postgres://";
const POSTGRES_PREFIX: &str = "postgresql://";

const REDACTED: &str = "***";
const PASSWORD_PARAM: &str = "password";

/// Where the connection string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseUrlSource {
    DatabaseUrl,
    SqlalchemyDatabaseUri,
    Default,
}

/// Database engine a connection string targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    /// Detects the backend from the URL scheme.
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else if url.starts_with(POSTGRES_PREFIX) || url.starts_with(LEGACY_POSTGRES_PREFIX) {
            Ok(Backend::Postgres)
        } else {
            let scheme = url.split(':').next().unwrap_or_default();
            Err(ConfigError::UnsupportedScheme(scheme.to_string()))
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Sqlite => write!(f, "sqlite"),
            Backend::Postgres => write!(f, "postgres"),
        }
    }
}

/// A resolved, scheme-normalized connection string.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseUrl {
    url: String,
    source: DatabaseUrlSource,
}

impl DatabaseUrl {
    /// Wraps an explicit connection string, normalizing its scheme.
    pub fn new(url: impl AsRef<str>, source: DatabaseUrlSource) -> Self {
        Self {
            url: normalize_scheme(url.as_ref()),
            source,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn source(&self) -> DatabaseUrlSource {
        self.source
    }

    pub fn is_default(&self) -> bool {
        self.source == DatabaseUrlSource::Default
    }

    pub fn backend(&self) -> Result<Backend, ConfigError> {
        Backend::from_url(&self.url)
    }

    /// Returns the URL with its password, if any, masked for logging.
    ///
    /// Both the userinfo password and a `password` query parameter are
    /// masked. Strings that do not parse as URLs are returned as-is.
    pub fn redacted(&self) -> String {
        let Ok(mut parsed) = Url::parse(&self.url) else {
            return self.url.clone();
        };
        let mut masked = false;

        if parsed.password().is_some() {
            masked = parsed.set_password(Some(REDACTED)).is_ok();
        }

        if parsed.query_pairs().any(|(key, _)| key == PASSWORD_PARAM) {
            let pairs: Vec<(String, String)> = parsed
                .query_pairs()
                .map(|(key, value)| {
                    let value = if key == PASSWORD_PARAM {
                        REDACTED.to_string()
                    } else {
                        value.into_owned()
                    };
                    (key.into_owned(), value)
                })
                .collect();
            parsed.query_pairs_mut().clear().extend_pairs(pairs);
            masked = true;
        }

        if masked {
            parsed.to_string()
        } else {
            self.url.clone()
        }
    }
}

// Never print credentials through Debug.
impl fmt::Debug for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseUrl")
            .field("url", &self.redacted())
            .field("source", &self.source)
            .finish()
    }
}

/// Rewrites a leading `postgres://` to `postgresql://`.
///
/// A `+driver` suffix on the scheme (`postgresql+psycopg2://`) is dropped
/// first. Only the scheme is touched; the remainder is kept verbatim.
pub fn normalize_scheme(url: &str) -> String {
    let url = strip_driver(url);
    match url.strip_prefix(LEGACY_POSTGRES_PREFIX) {
        Some(rest) => format!("{POSTGRES_PREFIX}{rest}"),
        None => url,
    }
}

fn strip_driver(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once(':') else {
        return url.to_string();
    };
    match scheme.split_once('+') {
        Some((base, _driver)) if !scheme.contains('/') => format!("{base}:{rest}"),
        _ => url.to_string(),
    }
}

/// Local file-based database inside `base_dir`.
pub fn default_database_url(base_dir: &Path) -> String {
    format!("sqlite://{}", base_dir.join(DEFAULT_DATABASE_FILE).display())
}

/// Resolves the connection string.
///
/// The first non-empty of `DATABASE_URL` and `SQLALCHEMY_DATABASE_URI` wins;
/// otherwise the local default in `base_dir` is used.
pub fn resolve_database_url<F>(lookup: &F, base_dir: &Path) -> DatabaseUrl
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(lookup, DATABASE_URL) {
        return DatabaseUrl::new(url, DatabaseUrlSource::DatabaseUrl);
    }
    if let Some(url) = non_empty(lookup, SQLALCHEMY_DATABASE_URI) {
        return DatabaseUrl::new(url, DatabaseUrlSource::SqlalchemyDatabaseUri);
    }

    let url = default_database_url(base_dir);
    tracing::warn!(
        "No {} or {} configured, falling back to {}",
        DATABASE_URL,
        SQLALCHEMY_DATABASE_URI,
        url
    );
    DatabaseUrl::new(url, DatabaseUrlSource::Default)
}
