//! Application settings stored in `config.toml`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::export::ExportFormat;
use crate::reveal::{DEFAULT_SETTLE_DELAY_MS, DEFAULT_TICK_INTERVAL_MS, RevealTiming};
use crate::tracing::{TracingConfig, TracingLevel, TracingOutput};

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Reveal animation
    pub reveal: RevealSettings,
    /// Team export
    pub export: ExportSettings,
    /// Logging
    pub logging: LoggingSettings,
}

impl AppSettings {
    /// Checks values that TOML alone cannot validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for an unknown export format or log
    /// level.
    pub fn validate(&self) -> ConfigResult<()> {
        self.export.format()?;
        self.logging.tracing_level()?;
        Ok(())
    }
}

/// Reveal animation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Delay between reveal ticks in milliseconds
    pub tick_interval_ms: u64,
    /// Delay after the last tick before completion, in milliseconds
    pub settle_delay_ms: u64,
    /// Whether `divide` animates by default
    pub animate: bool,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            animate: true,
        }
    }
}

impl RevealSettings {
    /// Sequencer timing for these settings
    #[must_use]
    pub const fn timing(&self) -> RevealTiming {
        RevealTiming::from_millis(self.tick_interval_ms, self.settle_delay_ms)
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Format used when `--export-format` is omitted and the path has no
    /// recognized extension
    pub default_format: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::default().as_str().to_string(),
        }
    }
}

impl ExportSettings {
    /// Parsed default format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the format name is unknown.
    pub fn format(&self) -> ConfigResult<ExportFormat> {
        self.default_format
            .parse()
            .map_err(|e| ConfigError::Parse(format!("export.default_format: {e}")))
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Base log level before `-v` flags are applied
    pub level: String,
    /// Log file; logs go to stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive replacing the level-based default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: TracingLevel::default().to_string(),
            file: None,
            filter: None,
        }
    }
}

impl LoggingSettings {
    /// Parsed log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the level name is unknown.
    pub fn tracing_level(&self) -> ConfigResult<TracingLevel> {
        self.level.parse().map_err(|()| {
            ConfigError::Parse(format!(
                "logging.level: unknown level '{}' (expected error, warn, info, debug or trace)",
                self.level
            ))
        })
    }

    /// Where log lines are written
    #[must_use]
    pub fn output(&self) -> TracingOutput {
        self.file
            .as_ref()
            .map_or(TracingOutput::Stderr, |path| TracingOutput::File {
                path: path.clone(),
            })
    }

    /// Subscriber configuration for a base level already adjusted by CLI flags
    #[must_use]
    pub fn tracing_config(&self, level: TracingLevel) -> TracingConfig {
        let config = TracingConfig::new()
            .with_level(level)
            .with_output(self.output());
        match self.filter.as_deref().map(str::trim) {
            Some(filter) if !filter.is_empty() => config.with_filter(filter),
            _ => config,
        }
    }
}
