use thiserror::Error;

use crate::config::ConfigError;
use crate::logger::LoggerError;
use crate::properties::PropertyError;

/// Application-wide error type for the emr-monitor binary.
///
/// The configuration facade itself never fails; these errors cover loading
/// settings and property files and reporting on the resolved configuration.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Settings could not be loaded or validated
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// A property file could not be loaded
    #[error("Property store error")]
    PropertyStore {
        #[from]
        source: PropertyError,
    },

    /// Logging could not be initialised
    #[error("Logger error")]
    Logger {
        #[from]
        source: LoggerError,
    },

    /// No parent server URL and credentials are configured
    #[error("Parent server is not configured: missing {missing}")]
    ParentServerNotConfigured { missing: String },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::ValidationError { field, message } => AppError::Validation {
                field,
                reason: message,
            },
            other => AppError::Configuration {
                key: "settings".to_string(),
                source: anyhow::Error::new(other),
            },
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_config_error_maps_to_validation() {
        let err: AppError = ConfigError::validation("logger.level", "bad level").into();
        match err {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "logger.level");
                assert_eq!(reason, "bad level");
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_other_config_errors_keep_source() {
        let err: AppError = ConfigError::file_not_found("config/default.toml").into();
        assert!(matches!(err, AppError::Configuration { .. }));
        let source = std::error::Error::source(&err).expect("Should have a source");
        assert!(source.to_string().contains("default.toml"));
    }

    #[test]
    fn test_parent_not_configured_message() {
        let err = AppError::ParentServerNotConfigured {
            missing: "emrmonitor.parentPassword".to_string(),
        };
        assert!(err.to_string().contains("emrmonitor.parentPassword"));
    }
}
