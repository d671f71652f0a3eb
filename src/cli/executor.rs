//! Command executor for dispatching CLI commands
//!
//! Entry point for running a parsed command once settings are loaded.

use super::handlers::{CheckCommandHandler, ShowCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::state::AppState;

/// Execute a CLI command with the given settings
///
/// Builds the application state from `settings` and dispatches to the
/// matching handler. `show` is the default command.
///
/// # Errors
/// Returns errors from loading the property files or from the handler
pub fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    let state = AppState::from_settings(settings)?;

    match cli.command.as_ref().unwrap_or(&Commands::Show { json: false }) {
        Commands::Show { json } => ShowCommandHandler::new(&state).execute(*json),
        Commands::Check => CheckCommandHandler::new(&state).execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use clap::Parser;
    use tempfile::TempDir;

    fn settings_with_runtime(content: &str) -> (Settings, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("runtime.toml");
        std::fs::write(&path, content).unwrap();

        let mut settings = Settings::default();
        settings.properties.runtime_file = Some(path);
        (settings, temp_dir)
    }

    #[test]
    fn test_execute_default_command() {
        let cli = Cli::try_parse_from(["emr-monitor"]).unwrap();
        assert!(execute_command(&cli, Settings::default()).is_ok());
    }

    #[test]
    fn test_execute_show_json() {
        let cli = Cli::try_parse_from(["emr-monitor", "show", "--json"]).unwrap();
        assert!(execute_command(&cli, Settings::default()).is_ok());
    }

    #[test]
    fn test_execute_check_configured() {
        let (settings, _dir) = settings_with_runtime(
            r#"
"emrmonitor.parentUrl" = "https://parent.example.org"
"emrmonitor.parentUsername" = "monitor"
"emrmonitor.parentPassword" = "secret"
"#,
        );
        let cli = Cli::try_parse_from(["emr-monitor", "check"]).unwrap();
        assert!(execute_command(&cli, settings).is_ok());
    }

    #[test]
    fn test_execute_check_unconfigured() {
        let (settings, _dir) =
            settings_with_runtime("\"emrmonitor.parentUrl\" = \"https://parent.example.org\"\n");
        let cli = Cli::try_parse_from(["emr-monitor", "check"]).unwrap();

        let result = execute_command(&cli, settings);
        assert!(matches!(
            result,
            Err(AppError::ParentServerNotConfigured { .. })
        ));
    }
}
