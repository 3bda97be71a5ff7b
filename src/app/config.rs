//! Configuration and storage location resolution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError};

/// Overrides the application home directory.
pub const HOME_ENV: &str = "PROMPTMASTER_HOME";
const HOME_DIR_NAME: &str = ".promptmaster";
const CONFIG_FILE: &str = "config.toml";
const STORAGE_DIR: &str = "storage";

/// Application home: `$PROMPTMASTER_HOME`, else `$HOME/.promptmaster`.
pub fn home_dir() -> Result<PathBuf, AppError> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(|home| PathBuf::from(home).join(HOME_DIR_NAME))
        .ok_or_else(|| {
            AppError::config_error(format!("Neither {} nor HOME is set", HOME_ENV))
        })
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `<home>/config.toml` is read
/// when present and defaults are used otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let path = home_dir()?.join(CONFIG_FILE);
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    AppConfig::parse(&content).map_err(|err| {
        AppError::config_error(format!("Invalid config {}: {}", path.display(), err))
    })
}

/// Directory holding the saved configuration list.
pub fn storage_dir(config: &AppConfig) -> Result<PathBuf, AppError> {
    match &config.storage.dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(home_dir()?.join(STORAGE_DIR)),
    }
}
