use std::io;

use thiserror::Error;

use crate::domain::Stage;

/// Library-wide error type for promptmaster operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Generic input validation failure.
    #[error("{0}")]
    Validation(String),

    /// Required selections are empty.
    #[error("Please complete the required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    /// No API credential was available at process start.
    #[error("API key not found: set the {var} environment variable")]
    MissingApiKey { var: String },

    /// Remote text-generation call failed.
    #[error("{message}")]
    CompletionApi { message: String, status: Option<u16> },

    /// Meta-prompt template could not be rendered.
    #[error("Prompt assembly failed: {0}")]
    PromptAssembly(String),

    /// Action is not available from the current stage.
    #[error("'{action}' is not available in the {stage} stage")]
    InvalidTransition { action: &'static str, stage: Stage },

    /// Direct navigation target lacks its prerequisite data.
    #[error("Cannot open the {target} stage: {reason}")]
    NavigationBlocked { target: Stage, reason: &'static str },

    /// A remote call is already outstanding.
    #[error("A generation request is already in progress")]
    Busy,

    /// Saved configuration lookup failed.
    #[error("Saved configuration '{0}' not found")]
    ConfigNotFound(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// JSON encoding of persisted data failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_labels() {
        let err = AppError::MissingRequiredFields(vec!["task", "audience"]);
        assert_eq!(err.to_string(), "Please complete the required fields: task, audience");
    }

    #[test]
    fn completion_error_displays_service_message_verbatim() {
        let err = AppError::CompletionApi { message: "quota exceeded".into(), status: Some(429) };
        assert_eq!(err.to_string(), "quota exceeded");
    }
}
