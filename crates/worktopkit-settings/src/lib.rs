//! WorktopKit Settings Crate
//!
//! Handles application configuration: pricing rates, preview constants and
//! export naming, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings, APP_DIR_NAME, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
