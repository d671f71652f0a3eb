//! Property names and fixed values shared with the rest of the monitor

/// Privilege required to manage the EMR monitor
pub const PRIV_MANAGE_EMR_MONITOR: &str = "Manage EmrMonitor";

/// Timeout for calls to the parent server, in milliseconds
pub const REMOTE_SERVER_TIMEOUT_MS: u64 = 10_000;

// Runtime properties
pub const PARENT_URL_PROPERTY: &str = "emrmonitor.parentUrl";
pub const PARENT_USERNAME_PROPERTY: &str = "emrmonitor.parentUsername";
pub const PARENT_PASSWORD_PROPERTY: &str = "emrmonitor.parentPassword";

// Global properties
pub const GP_DISABLED_METRIC_PRODUCERS: &str = "emrmonitor.disabledMetricProducers";
pub const GP_MINUTES_BETWEEN_REPORTS: &str = "emrmonitor.minutesBetweenReports";

/// Reports run daily unless configured otherwise
pub const DEFAULT_MINUTES_BETWEEN_REPORTS: i32 = 60 * 24;

/// Separator used in list-valued global properties
pub(crate) const LIST_SEPARATOR: char = ',';
