//! EMR monitor configuration
//!
//! [`EmrMonitorConfig`] resolves the monitor's settings from the runtime and
//! global property stores:
//! - Parent server URL and credentials come from runtime properties, are
//!   resolved once when the config is built, and are cached in memory
//! - Disabled metric producers and the report interval come from global
//!   properties and are re-read on every call

pub mod constants;
pub mod facade;

pub use constants::*;
pub use facade::{EmrMonitorConfig, ParentServer};
