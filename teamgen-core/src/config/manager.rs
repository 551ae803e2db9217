//! Configuration directory and `config.toml` handling

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, StoreResult};
use crate::store::FileStore;

use super::settings::AppSettings;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "TEAMGEN_CONFIG_DIR";

/// Settings file name inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Locates and manages the configuration directory.
///
/// The directory holds `config.toml` and the persistent store file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Uses `$TEAMGEN_CONFIG_DIR` if set, else the platform config directory
    /// joined with `teamgen`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if neither is available.
    pub fn new() -> ConfigResult<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::with_config_dir(PathBuf::from(dir)));
        }
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join("teamgen")))
    }

    /// Uses an explicit configuration directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// The configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of `config.toml`
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Creates the configuration directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> ConfigResult<()> {
        fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }

    /// Loads settings; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds invalid values.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        let path = self.config_path();
        let _span = crate::trace_operation_debug!(
            crate::tracing::span_names::CONFIG_LOAD,
            path = %path.display()
        )
        .entered();

        if !path.exists() {
            tracing::debug!("No config file, using defaults");
            return Ok(AppSettings::default());
        }

        let raw = fs::read_to_string(&path)?;
        let settings: AppSettings =
            toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes settings to `config.toml`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_settings(&self, settings: &AppSettings) -> ConfigResult<()> {
        let path = self.config_path();
        let _span = crate::trace_operation!(
            crate::tracing::span_names::CONFIG_SAVE,
            path = %path.display()
        )
        .entered();

        let raw =
            toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        self.ensure_config_dir()?;
        fs::write(&path, raw)?;
        tracing::info!("Settings saved");
        Ok(())
    }

    /// Opens the persistent store kept in the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing store file cannot be read or parsed.
    pub fn open_store(&self) -> StoreResult<FileStore> {
        FileStore::open(&self.config_dir)
    }
}
