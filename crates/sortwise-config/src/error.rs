//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Loading errors
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to load configuration: {0}")]
    Extract(#[from] figment::Error),

    // Validation errors
    #[error("invalid value for '{field}': {hint}")]
    InvalidValue { field: String, hint: String },

    #[error("scenario '{0}' is defined more than once")]
    DuplicateScenario(String),

    #[error("case '{0}' does not match any scenario")]
    UnknownCase(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            hint: hint.into(),
        }
    }
}
