//! Configuration validation logic
//!
//! Validation methods for the settings structures, checking values are within
//! acceptable ranges and formats before the agent starts.

use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, LoggerSettings, PropertiesConfig, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl FileSettings {
    /// Validate file settings
    fn validate(&self) -> Result<(), ConfigError> {
        // If file logging is enabled, path must not be empty
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    /// - At least one output must be enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()?;

        Ok(())
    }
}

impl PropertiesConfig {
    /// Validate property file locations
    ///
    /// Paths are optional, but a configured path must not be blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_optional_path("properties.runtime_file", self.runtime_file.as_deref())?;
        validate_optional_path("properties.global_file", self.global_file.as_deref())?;
        Ok(())
    }
}

fn validate_optional_path(field: &str, path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        Some(path) if path.as_os_str().to_string_lossy().trim().is_empty() => {
            Err(ConfigError::ValidationError {
                field: field.to_string(),
                message: "Property file path must not be blank. Remove the key to disable it."
                    .to_string(),
            })
        }
        _ => Ok(()),
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logger.validate()?;
        self.properties.validate()?;
        Ok(())
    }
}
