//! Settings error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the agent settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required settings file is missing
    #[error("Settings file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The merged sources do not deserialize into `[application]`, `[logger]`
    /// and `[properties]`
    #[error("Settings do not match the expected layout: {source}")]
    Deserialize {
        #[source]
        source: config::ConfigError,
    },

    /// A setting holds a value the agent cannot use
    #[error("Invalid setting '{field}': {message}")]
    ValidationError { field: String, message: String },

    /// `EMRMONITOR_APP_ENV` (or `--env`) names no known environment
    #[error(
        "Unknown environment '{value}'; expected one of development, test, staging, production"
    )]
    UnknownEnvironment { value: String },

    /// Both the layered directory and a single settings file were requested
    #[error("{dir_var} and {file_var} cannot both be set; pick layered or single-file settings")]
    ConflictingSources {
        dir_var: &'static str,
        file_var: &'static str,
    },

    /// A settings source could not be read or merged
    #[error("Failed to merge settings sources: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::FileNotFound { path: path.into() }
    }
}
