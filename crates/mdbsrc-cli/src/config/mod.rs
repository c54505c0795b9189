//! Application configuration module.
//!
//! Manages the TOML config file holding source settings such as the
//! JustWatch catalog locale.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, JustWatchConfig};
pub use paths::resolve_config_path;
