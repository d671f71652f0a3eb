//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::build;

/// Inspect the EMR monitor configuration
#[derive(Parser, Debug)]
#[command(name = "emr-monitor")]
#[command(about = "Inspect the EMR monitor configuration")]
#[command(long_about = "
emr-monitor resolves the monitor's configuration: the parent server URL and
credentials from the runtime properties file, and the disabled metric
producers and report interval from the global properties.

EXAMPLES:
    # Show the resolved configuration
    emr-monitor show

    # Same, as JSON
    emr-monitor show --json

    # Fail unless a parent server is configured
    emr-monitor check

    # Use a custom settings file
    emr-monitor --config /etc/emr-monitor/settings.toml show
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Settings file path
    ///
    /// Load this TOML file instead of the layered `config/` directory.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/emr-monitor/settings.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved configuration (default)
    ///
    /// The parent server password is never printed; only whether it is set.
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Exit with an error unless a parent server is configured
    ///
    /// Useful in deployment scripts before enabling reporting.
    Check,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
