//! Typed access to the EMR monitor configuration.

use std::fmt;
use std::num::ParseIntError;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tracing::{debug, warn};

use crate::monitor::constants::{
    DEFAULT_MINUTES_BETWEEN_REPORTS, GP_DISABLED_METRIC_PRODUCERS, GP_MINUTES_BETWEEN_REPORTS,
    LIST_SEPARATOR, PARENT_PASSWORD_PROPERTY, PARENT_URL_PROPERTY, PARENT_USERNAME_PROPERTY,
    REMOTE_SERVER_TIMEOUT_MS,
};
use crate::properties::{GlobalPropertySource, RuntimePropertySource};

/// Cached runtime values for the parent server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ParentServerFields {
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl ParentServerFields {
    fn resolve(runtime: &dyn RuntimePropertySource) -> Self {
        Self {
            url: resolve_property(runtime, PARENT_URL_PROPERTY, None),
            username: resolve_property(runtime, PARENT_USERNAME_PROPERTY, None),
            password: resolve_property(runtime, PARENT_PASSWORD_PROPERTY, None),
        }
    }

    fn is_configured(&self) -> bool {
        [&self.url, &self.username, &self.password]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !is_blank(v)))
    }
}

/// A fully configured parent server.
#[derive(Clone, PartialEq, Eq)]
pub struct ParentServer {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ParentServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParentServer")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Configuration facade for the EMR monitor.
///
/// Parent server settings are resolved from the runtime store when the facade
/// is built and then served from memory. Setters change only the in-memory
/// copy; nothing is written back to the runtime store.
///
/// Global properties are looked up on every call so operator edits take effect
/// without a restart.
pub struct EmrMonitorConfig {
    runtime: Arc<dyn RuntimePropertySource>,
    global: Arc<dyn GlobalPropertySource>,
    parent: RwLock<ParentServerFields>,
}

impl EmrMonitorConfig {
    /// Build the facade and resolve the parent server settings.
    pub fn new(
        runtime: Arc<dyn RuntimePropertySource>,
        global: Arc<dyn GlobalPropertySource>,
    ) -> Self {
        let parent = ParentServerFields::resolve(runtime.as_ref());
        debug!(
            configured = parent.is_configured(),
            "Resolved parent server settings"
        );

        Self {
            runtime,
            global,
            parent: RwLock::new(parent),
        }
    }

    /// True if the parent URL, username and password are all non-blank.
    pub fn is_parent_server_configured(&self) -> bool {
        self.read_parent().is_configured()
    }

    /// Snapshot of the parent server, if it is configured.
    pub fn parent_server(&self) -> Option<ParentServer> {
        let parent = self.read_parent();
        if !parent.is_configured() {
            return None;
        }

        Some(ParentServer {
            url: parent.url.clone().unwrap_or_default(),
            username: parent.username.clone().unwrap_or_default(),
            password: parent.password.clone().unwrap_or_default(),
        })
    }

    pub fn parent_url(&self) -> Option<String> {
        self.read_parent().url.clone()
    }

    pub fn parent_username(&self) -> Option<String> {
        self.read_parent().username.clone()
    }

    pub fn parent_password(&self) -> Option<String> {
        self.read_parent().password.clone()
    }

    /// Override the parent URL in memory. Pass `None::<&str>` to clear it.
    pub fn set_parent_url<S: Into<String>>(&self, url: impl Into<Option<S>>) {
        self.write_parent().url = url.into().map(Into::into);
    }

    pub fn set_parent_username<S: Into<String>>(&self, username: impl Into<Option<S>>) {
        self.write_parent().username = username.into().map(Into::into);
    }

    pub fn set_parent_password<S: Into<String>>(&self, password: impl Into<Option<S>>) {
        self.write_parent().password = password.into().map(Into::into);
    }

    /// Re-resolve the parent server settings, discarding in-memory overrides.
    pub fn reload_parent_server(&self) {
        let parent = ParentServerFields::resolve(self.runtime.as_ref());
        debug!(
            configured = parent.is_configured(),
            "Reloaded parent server settings"
        );
        *self.write_parent() = parent;
    }

    /// Look up a runtime property, falling back to `default` when it is
    /// absent or blank. The stored value is returned untrimmed.
    pub fn resolve_runtime_property(&self, name: &str, default: Option<&str>) -> Option<String> {
        resolve_property(self.runtime.as_ref(), name, default)
    }

    /// Metric producers the operator has switched off, in configured order.
    pub fn disabled_metric_producers(&self) -> Vec<String> {
        self.global_value(GP_DISABLED_METRIC_PRODUCERS)
            .map(|raw| split_list(&raw))
            .unwrap_or_default()
    }

    /// False if `producer` is listed in the disabled metric producers.
    pub fn is_metric_producer_enabled(&self, producer: &str) -> bool {
        !self
            .disabled_metric_producers()
            .iter()
            .any(|disabled| disabled == producer)
    }

    /// Minutes between reports, defaulting to one day.
    pub fn minutes_between_reports(&self) -> i32 {
        let Some(raw) = self.global_value(GP_MINUTES_BETWEEN_REPORTS) else {
            return DEFAULT_MINUTES_BETWEEN_REPORTS;
        };

        match parse_minutes(&raw) {
            Ok(minutes) => minutes,
            Err(err) => {
                warn!(
                    property = GP_MINUTES_BETWEEN_REPORTS,
                    value = %raw,
                    error = %err,
                    "Invalid configuration for global property, using default"
                );
                DEFAULT_MINUTES_BETWEEN_REPORTS
            }
        }
    }

    /// Report interval as a duration. Intervals shorter than a minute fall
    /// back to the default.
    pub fn report_interval(&self) -> Duration {
        let minutes = match u64::try_from(self.minutes_between_reports()) {
            Ok(minutes) if minutes > 0 => minutes,
            _ => {
                warn!(
                    property = GP_MINUTES_BETWEEN_REPORTS,
                    "Report interval must be at least one minute, using default"
                );
                DEFAULT_MINUTES_BETWEEN_REPORTS as u64
            }
        };
        Duration::from_secs(minutes * 60)
    }

    pub fn remote_server_timeout(&self) -> Duration {
        Duration::from_millis(REMOTE_SERVER_TIMEOUT_MS)
    }

    fn global_value(&self, name: &str) -> Option<String> {
        self.global
            .global_property(name)
            .filter(|value| !is_blank(value))
    }

    fn read_parent(&self) -> std::sync::RwLockReadGuard<'_, ParentServerFields> {
        self.parent.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_parent(&self) -> std::sync::RwLockWriteGuard<'_, ParentServerFields> {
        self.parent.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for EmrMonitorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self.read_parent();
        f.debug_struct("EmrMonitorConfig")
            .field("parent_url", &parent.url)
            .field("parent_username", &parent.username)
            .field("parent_password", &parent.password.as_ref().map(|_| "********"))
            .finish_non_exhaustive()
    }
}

fn resolve_property(
    runtime: &dyn RuntimePropertySource,
    name: &str,
    default: Option<&str>,
) -> Option<String> {
    match runtime.property(name) {
        Some(value) if !is_blank(&value) => Some(value),
        _ => default.map(str::to_string),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Split a comma-separated list. Empty segments between adjacent separators
/// are skipped; every other segment is trimmed and kept, duplicates included.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim().to_string())
        .collect()
}

fn parse_minutes(raw: &str) -> Result<i32, ParseIntError> {
    raw.parse::<i32>()
}
