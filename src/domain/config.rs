//! Application configuration loaded from `config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    /// Settings for the call that turns selections into a prompt.
    #[serde(default = "SamplingConfig::refine")]
    pub refine: SamplingConfig,
    /// Settings for the call that runs the refined prompt.
    #[serde(default = "SamplingConfig::execute")]
    pub execute: SamplingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            refine: SamplingConfig::refine(),
            execute: SamplingConfig::execute(),
            storage: StorageConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.refine.validate("refine")?;
        self.execute.validate("execute")?;
        Ok(())
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Text-generation service endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL; `models/<model>:generateContent` is resolved against it.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout; the transport default applies when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), api_key_env: default_api_key_env(), timeout_secs: None }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::config_error("api.api_key_env must not be empty"));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("api.timeout_secs must be greater than 0"));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "api.base_url is not a valid base URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Base URL with a trailing slash so relative joins keep its path.
    pub fn normalized_base_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("Default API URL must be valid")
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Accepted when the configured variable is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Model and randomness for one of the two remote calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingConfig {
    pub model: String,
    pub temperature: f32,
}

impl SamplingConfig {
    pub fn refine() -> Self {
        Self { model: "gemini-2.5-flash".to_string(), temperature: 0.7 }
    }

    pub fn execute() -> Self {
        Self { model: "gemini-3-pro-preview".to_string(), temperature: 0.3 }
    }

    fn validate(&self, section: &str) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error(format!("{}.model must not be empty", section)));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error(format!(
                "{}.temperature must be between 0.0 and 2.0",
                section
            )));
        }
        Ok(())
    }
}

/// Local storage location for saved configurations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}
