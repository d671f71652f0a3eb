//! Runtime property store
//!
//! An immutable snapshot of deployment-time properties, loaded from a TOML
//! file or built from an in-memory map.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::properties::error::PropertyError;
use crate::properties::source::RuntimePropertySource;
use crate::properties::{parse_property_table, read_property_file};

/// Runtime properties keyed by dotted property name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeProperties {
    values: HashMap<String, String>,
}

impl RuntimeProperties {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse runtime properties from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, PropertyError> {
        Ok(Self {
            values: parse_property_table(content)?,
        })
    }

    /// Load runtime properties from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PropertyError> {
        let values = read_property_file(path)?;
        debug!(
            path = %path.display(),
            count = values.len(),
            "Loaded runtime properties"
        );
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl RuntimePropertySource for RuntimeProperties {
    fn property(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
