//! Live global property store.

use std::path::Path;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::properties::error::PropertyError;
use crate::properties::read_property_file;
use crate::properties::source::GlobalPropertySource;

/// Operator-editable global properties.
///
/// Values may be changed at any time through [`GlobalProperties::set`] and
/// [`GlobalProperties::remove`]; readers always observe the latest value.
#[derive(Debug, Default)]
pub struct GlobalProperties {
    values: DashMap<String, String>,
}

impl GlobalProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, PropertyError> {
        let values = read_property_file(path)?;
        debug!(
            path = %path.display(),
            count = values.len(),
            "Loaded global properties"
        );
        Ok(Self {
            values: values.into_iter().collect(),
        })
    }

    /// Set a global property, returning the previous value.
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        info!(property = %name, "Global property updated");
        self.values.insert(name, value.into())
    }

    /// Remove a global property, returning its value.
    pub fn remove(&self, name: &str) -> Option<String> {
        let removed = self.values.remove(name).map(|(_, value)| value);
        if removed.is_some() {
            info!(property = %name, "Global property removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl GlobalPropertySource for GlobalProperties {
    fn global_property(&self, name: &str) -> Option<String> {
        self.values.get(name).map(|entry| entry.value().clone())
    }
}

impl<K, V> FromIterator<(K, V)> for GlobalProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
