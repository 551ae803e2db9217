//! Configuration management for `teamgen`
//!
//! This module provides the `ConfigManager` for locating the configuration
//! directory and loading and saving `config.toml`.

mod manager;
pub mod settings;

pub use manager::{CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigManager};
pub use settings::{AppSettings, ExportSettings, LoggingSettings, RevealSettings};
