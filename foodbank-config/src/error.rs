//! Error types for configuration loading.

/// Configuration errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Unsupported database URL scheme: {0} (expected sqlite, postgres or postgresql)")]
    UnsupportedScheme(String),
}
