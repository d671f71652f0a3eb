use clap::Parser;
use tracing::error;

use emr_monitor::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    if let Err(e) = execute_command(&cli, settings) {
        error!(error = %e, "Command failed");
        return Err(e.into());
    }

    Ok(())
}
