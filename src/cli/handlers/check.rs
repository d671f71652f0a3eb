//! Check command handler
//!
//! Fails unless the parent server URL and credentials are all configured.

use crate::error::{AppError, AppResult};
use crate::monitor::{PARENT_PASSWORD_PROPERTY, PARENT_URL_PROPERTY, PARENT_USERNAME_PROPERTY};
use crate::state::AppState;

/// Handler for the check command
pub struct CheckCommandHandler<'a> {
    state: &'a AppState,
}

impl<'a> CheckCommandHandler<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Names of the runtime properties that are missing or blank
    pub fn missing_properties(&self) -> Vec<&'static str> {
        let monitor = &self.state.monitor;
        [
            (PARENT_URL_PROPERTY, monitor.parent_url()),
            (PARENT_USERNAME_PROPERTY, monitor.parent_username()),
            (PARENT_PASSWORD_PROPERTY, monitor.parent_password()),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn execute(&self) -> AppResult<()> {
        match self.state.monitor.parent_server() {
            Some(parent) => {
                println!("✓ Parent server configured: {}", parent.url);
                Ok(())
            }
            None => Err(AppError::ParentServerNotConfigured {
                missing: self.missing_properties().join(", "),
            }),
        }
    }
}
