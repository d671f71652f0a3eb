//! Application state for the emr-monitor agent.
//!
//! Built once at startup from the loaded settings and passed by reference to
//! everything that needs configuration.

use std::sync::Arc;

use tracing::debug;

use crate::config::Settings;
use crate::error::AppResult;
use crate::monitor::EmrMonitorConfig;
use crate::properties::{GlobalProperties, RuntimeProperties};

/// Application state containing the configuration facade and its stores.
///
/// Cloning is cheap since the facade and the global store are shared.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Resolved monitor configuration
    pub monitor: Arc<EmrMonitorConfig>,
    /// Live global property store, editable while the agent runs
    pub global_properties: Arc<GlobalProperties>,
    /// Settings the state was built from
    pub settings: Settings,
}

impl AppState {
    /// Build the state from settings, loading the configured property files.
    ///
    /// Missing `properties.runtime_file` / `properties.global_file` entries
    /// yield empty stores; a configured file that cannot be read is an error.
    pub fn from_settings(settings: Settings) -> AppResult<Self> {
        let runtime = match settings.properties.runtime_file {
            Some(ref path) => RuntimeProperties::from_file(path)?,
            None => RuntimeProperties::new(),
        };

        let global_properties = Arc::new(match settings.properties.global_file {
            Some(ref path) => GlobalProperties::from_file(path)?,
            None => GlobalProperties::new(),
        });

        let monitor = Arc::new(EmrMonitorConfig::new(
            Arc::new(runtime),
            global_properties.clone(),
        ));

        debug!(
            parent_configured = monitor.is_parent_server_configured(),
            "EMR monitor configuration ready"
        );

        Ok(Self {
            monitor,
            global_properties,
            settings,
        })
    }
}
