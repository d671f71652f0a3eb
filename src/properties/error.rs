//! Property store error types

use std::path::Path;

use thiserror::Error;

/// Errors raised while loading a property store from disk
///
/// Lookups themselves never fail; absence of a property is a normal outcome.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// The property file could not be read
    #[error("Failed to read property file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The property file is not valid TOML
    #[error("Failed to parse property file '{}': {source}", .path.as_deref().unwrap_or("<inline>"))]
    Parse {
        path: Option<String>,
        #[source]
        source: toml::de::Error,
    },

    /// A property holds a value that cannot be represented as a string
    #[error("Unsupported {kind} value for property '{key}'")]
    UnsupportedValue { key: String, kind: &'static str },
}

impl PropertyError {
    /// Attach the file path to a parse error raised from in-memory content
    pub(crate) fn with_path(self, file: &Path) -> Self {
        match self {
            PropertyError::Parse { path: None, source } => PropertyError::Parse {
                path: Some(file.display().to_string()),
                source,
            },
            other => other,
        }
    }
}
