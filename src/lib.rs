//! EMR Monitor Library
//!
//! Configuration resolution for the EMR monitor agent: parent server
//! credentials from runtime properties and live global properties.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod monitor;
pub mod properties;
pub mod state;

pub use monitor::EmrMonitorConfig;
pub use state::AppState;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
