//! Variable lookup helpers.
//!
//! Every loader in this crate takes a `lookup` function of shape
//! `Fn(&str) -> Option<String>`. [`process_env`] is the one backed by the
//! real process environment.

use std::str::FromStr;

use crate::ConfigError;

/// Reads a variable from the process environment.
///
/// Unset and non-unicode variables both read as `None`.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Returns the variable's value unless it is unset or empty.
pub fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.is_empty())
}

/// Parses a variable, falling back to `default` when unset or empty.
pub fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_empty(lookup, key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
