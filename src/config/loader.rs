//! Configuration loader for emr-monitor
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! settings from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use tracing::debug;

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "EMRMONITOR_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "EMRMONITOR_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "EMRMONITOR";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.toml` - Base default configuration (required)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local overrides (optional)
/// 4. `EMRMONITOR_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current deployment environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// This reads environment variables to determine:
    /// - Configuration directory (`EMRMONITOR_CONFIG_DIR`)
    /// - Specific configuration file (`EMRMONITOR_CONFIG_FILE`)
    /// - Deployment environment (`EMRMONITOR_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `EMRMONITOR_CONFIG_DIR` and
    /// `EMRMONITOR_CONFIG_FILE` are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir_env = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && config_dir_env.is_some() {
            return Err(ConfigError::ConflictingSources {
                dir_var: CONFIG_DIR_ENV,
                file_var: CONFIG_FILE_ENV,
            });
        }

        Ok(Self {
            config_dir: config_dir_env
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Load a single configuration file instead of the layered directory
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Override the environment read from `EMRMONITOR_APP_ENV`
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load and validate settings from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default.toml` (or the single configuration file) is not found
    /// - Configuration parsing fails
    /// - Configuration validation fails
    ///
    /// Relative `properties.*_file` paths, including ones set through
    /// `EMRMONITOR_PROPERTIES__*`, are resolved against the settings directory.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let mut settings: Settings = config
            .try_deserialize()
            .map_err(|source| ConfigError::Deserialize { source })?;

        settings.validate()?;
        settings.properties.resolve_relative_to(self.base_dir());

        debug!(
            environment = %self.environment,
            config_file = ?self.config_file,
            "Loaded settings"
        );
        Ok(settings)
    }

    /// Directory that relative property file paths are resolved against
    ///
    /// The parent of the single settings file when one is given, otherwise
    /// the layered settings directory.
    fn base_dir(&self) -> &Path {
        match self.config_file {
            Some(ref file) => file.parent().unwrap_or(Path::new("")),
            None => &self.config_dir,
        }
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            Self::add_file_source(builder, config_file, true)?
        } else {
            self.build_layered_config(builder)?
        };

        // EMRMONITOR_LOGGER__LEVEL -> logger.level
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = Self::add_file_source(builder, &default_path, true)?;

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = Self::add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        Self::add_file_source(builder, &local_path, false)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        Ok(builder.add_source(
            File::new(&path.to_string_lossy(), FileFormat::Toml).required(required),
        ))
    }

    /// Environment variables with prefix `EMRMONITOR_` map to configuration
    /// keys, with `__` separating nested keys:
    /// - `EMRMONITOR_LOGGER__LEVEL` -> `logger.level`
    /// - `EMRMONITOR_PROPERTIES__RUNTIME_FILE` -> `properties.runtime_file`
    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: None,
            environment: AppEnvironment::default(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serialises tests that touch process environment variables
    pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Sets environment variables for a test and restores them on drop
    pub(crate) struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        pub(crate) fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        pub(crate) fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        pub(crate) fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }

        /// Clear every variable the loader reads
        pub(crate) fn clear_loader_vars(&mut self) {
            for key in [
                CONFIG_DIR_ENV,
                CONFIG_FILE_ENV,
                AppEnvironment::ENV_VAR,
                "EMRMONITOR_LOGGER__LEVEL",
                "EMRMONITOR_PROPERTIES__RUNTIME_FILE",
            ] {
                self.remove(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    const DEFAULT_CONFIG: &str = r#"
[application]
name = "test-monitor"
version = "1.0.0"

[logger]
level = "info"

[logger.console]
enabled = true
colored = false

[properties]
runtime_file = "default-runtime.toml"
"#;

    #[test]
    fn test_config_loader_new_default() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.clear_loader_vars();

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_conflicting_sources() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.clear_loader_vars();
        env.set(CONFIG_DIR_ENV, "/custom/config");
        env.set(CONFIG_FILE_ENV, "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::ConflictingSources { dir_var, file_var }) => {
                assert_eq!(dir_var, CONFIG_DIR_ENV);
                assert_eq!(file_var, CONFIG_FILE_ENV);
            }
            other => panic!("Expected ConflictingSources, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_default_toml() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.clear_loader_vars();

        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let result = ConfigLoader::new().expect("Should create loader").load();
        match result {
            Err(ConfigError::FileNotFound { path }) => {
                assert_eq!(path, temp_dir.path().join("default.toml"))
            }
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_default_toml_only() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.clear_loader_vars();

        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_CONFIG)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new()
            .expect("Should create loader")
            .load()
            .expect("Should load settings");

        assert_eq!(settings.application.name, "test-monitor");
        assert_eq!(
            settings.properties.runtime_file,
            Some(temp_dir.path().join("default-runtime.toml"))
        );
        assert!(settings.properties.global_file.is_none());
    }

    #[test]
    fn test_load_full_precedence_chain() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.clear_loader_vars();

        let production_config = r#"
[application]
name = "prod-monitor"

[logger]
level = "warn"

[properties]
global_file = "prod-global.toml"
"#;
        let local_config = r#"
[logger]
level = "error"
"#;

        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_CONFIG),
            ("production.toml", production_config),
            ("local.toml", local_config),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set(AppEnvironment::ENV_VAR, "production");
        env.set("EMRMONITOR_PROPERTIES__RUNTIME_FILE", "env-runtime.toml");

        let settings = ConfigLoader::new()
            .expect("Should create loader")
            .load()
            .expect("Should load settings");

        // Environment variable has highest priority
        assert_eq!(
            settings.properties.runtime_file,
            Some(temp_dir.path().join("env-runtime.toml"))
        );
        // local.toml overrides production.toml
        assert_eq!(settings.logger.level, "error");
        // production.toml overrides default.toml
        assert_eq!(settings.application.name, "prod-monitor");
        assert_eq!(
            settings.properties.global_file,
            Some(temp_dir.path().join("prod-global.toml"))
        );
        // default.toml provides base values
        assert_eq!(settings.application.version, "1.0.0");
    }

    #[test]
    fn test_with_environment_overrides_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.clear_loader_vars();

        let staging_config = r#"
[application]
name = "staging-monitor"
"#;
        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_CONFIG),
            ("staging.toml", staging_config),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set(AppEnvironment::ENV_VAR, "production");

        let settings = ConfigLoader::new()
            .expect("Should create loader")
            .with_environment(AppEnvironment::Staging)
            .load()
            .expect("Should load settings");

        assert_eq!(settings.application.name, "staging-monitor");
    }

    #[test]
    fn test_load_single_file_mode() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.clear_loader_vars();

        let single_config = r#"
[application]
name = "single-file-monitor"

[properties]
runtime_file = "/etc/emr-monitor/runtime.toml"
global_file = "/etc/emr-monitor/global.toml"
"#;
        let temp_dir = setup_config_dir(&[("single.toml", single_config)]);
        env.set(
            CONFIG_FILE_ENV,
            temp_dir.path().join("single.toml").to_str().unwrap(),
        );

        let settings = ConfigLoader::new()
            .expect("Should create loader")
            .load()
            .expect("Should load settings");

        assert_eq!(settings.application.name, "single-file-monitor");
        assert_eq!(
            settings.properties.global_file,
            Some(PathBuf::from("/etc/emr-monitor/global.toml"))
        );
        // Omitted sections take their defaults
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn test_single_file_relative_paths_follow_the_file() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.clear_loader_vars();

        let temp_dir = setup_config_dir(&[(
            "settings.toml",
            "[properties]\nruntime_file = \"runtime.toml\"\nglobal_file = \"/srv/global.toml\"\n",
        )]);

        let settings = ConfigLoader::new()
            .expect("Should create loader")
            .with_config_file(temp_dir.path().join("settings.toml"))
            .load()
            .expect("Should load settings");

        assert_eq!(
            settings.properties.runtime_file,
            Some(temp_dir.path().join("runtime.toml"))
        );
        // Absolute paths are kept as written
        assert_eq!(
            settings.properties.global_file,
            Some(PathBuf::from("/srv/global.toml"))
        );
    }

    #[test]
    fn test_load_rejects_invalid_settings() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();
        env.clear_loader_vars();

        let temp_dir = setup_config_dir(&[("default.toml", "[logger]\nlevel = \"loud\"\n")]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let result = ConfigLoader::new().expect("Should create loader").load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
