//! Configuration loading from environment.

use std::path::{Path, PathBuf};

use foodbank_config::AppConfig;

/// Returns the `.env` file inside `base_dir`, if there is one.
pub fn dotenv_path(base_dir: &Path) -> Option<PathBuf> {
    let path = base_dir.join(".env");
    path.is_file().then_some(path)
}

/// Loads `base_dir/.env` into the process environment.
///
/// Variables already set in the environment are left untouched.
/// Returns the loaded path.
pub fn load_dotenv(base_dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    match dotenv_path(base_dir) {
        Some(path) => {
            dotenvy::from_path(&path)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

/// Loads the application configuration from environment variables.
pub fn from_env(base_dir: &Path) -> anyhow::Result<AppConfig> {
    Ok(AppConfig::from_env(base_dir)?)
}
