//! Show command handler
//!
//! Prints the configuration the monitor resolves from its property stores.

use std::fmt::Write as _;
use std::io;

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Snapshot of the resolved monitor configuration
///
/// The parent password is reported only as set / not set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationReport {
    pub parent_server_configured: bool,
    pub parent_url: Option<String>,
    pub parent_username: Option<String>,
    pub parent_password_set: bool,
    pub disabled_metric_producers: Vec<String>,
    pub minutes_between_reports: i32,
    pub remote_server_timeout_ms: u64,
}

impl ConfigurationReport {
    pub fn from_state(state: &AppState) -> Self {
        let monitor = &state.monitor;
        Self {
            parent_server_configured: monitor.is_parent_server_configured(),
            parent_url: monitor.parent_url(),
            parent_username: monitor.parent_username(),
            parent_password_set: monitor
                .parent_password()
                .is_some_and(|p| !p.trim().is_empty()),
            disabled_metric_producers: monitor.disabled_metric_producers(),
            minutes_between_reports: monitor.minutes_between_reports(),
            remote_server_timeout_ms: monitor.remote_server_timeout().as_millis() as u64,
        }
    }

    /// Render as aligned `key: value` lines
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let unset = "<unset>";

        let _ = writeln!(
            out,
            "Parent server configured:  {}",
            if self.parent_server_configured { "yes" } else { "no" }
        );
        let _ = writeln!(
            out,
            "Parent URL:                {}",
            self.parent_url.as_deref().unwrap_or(unset)
        );
        let _ = writeln!(
            out,
            "Parent username:           {}",
            self.parent_username.as_deref().unwrap_or(unset)
        );
        let _ = writeln!(
            out,
            "Parent password:           {}",
            if self.parent_password_set { "********" } else { unset }
        );
        let producers = if self.disabled_metric_producers.is_empty() {
            "<none>".to_string()
        } else {
            self.disabled_metric_producers.join(", ")
        };
        let _ = writeln!(out, "Disabled metric producers: {}", producers);
        let _ = writeln!(
            out,
            "Minutes between reports:   {}",
            self.minutes_between_reports
        );
        let _ = writeln!(
            out,
            "Remote server timeout:     {} ms",
            self.remote_server_timeout_ms
        );

        out
    }
}

/// Handler for the show command
pub struct ShowCommandHandler<'a> {
    state: &'a AppState,
}

impl<'a> ShowCommandHandler<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Render the report as text or JSON
    pub fn render(&self, json: bool) -> AppResult<String> {
        let report = ConfigurationReport::from_state(self.state);
        if json {
            serde_json::to_string_pretty(&report).map_err(|e| AppError::Internal {
                source: anyhow::Error::new(e),
            })
        } else {
            Ok(report.render_text())
        }
    }

    /// Write the rendered report and nothing else to `out`
    pub fn write_report<W: io::Write>(&self, out: &mut W, json: bool) -> AppResult<()> {
        let report = self.render(json)?;
        writeln!(out, "{}", report).map_err(|e| AppError::Internal {
            source: anyhow::Error::new(e),
        })
    }

    pub fn execute(&self, json: bool) -> AppResult<()> {
        self.write_report(&mut io::stdout().lock(), json)
    }
}
