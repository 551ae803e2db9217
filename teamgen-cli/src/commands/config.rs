//! Configuration commands.

use std::path::Path;

use teamgen_core::config::AppSettings;
use teamgen_core::store::STORE_FILE_NAME;

use crate::error::CliError;
use crate::util::{create_config_manager, status};

/// Config show command handler
pub fn cmd_config_show(config_path: Option<&Path>) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let settings = config_manager.load_settings()?;
    let config_file = config_manager.config_path();

    println!("Config directory: {}", config_manager.config_dir().display());
    println!(
        "Config file:      {}{}",
        config_file.display(),
        if config_file.exists() { "" } else { " (not created, using defaults)" }
    );
    println!(
        "Store file:       {}",
        config_manager.config_dir().join(STORE_FILE_NAME).display()
    );
    println!();

    let rendered = toml::to_string_pretty(&settings)
        .map_err(|e| CliError::Config(format!("Failed to serialize settings: {e}")))?;
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Config init command handler
pub fn cmd_config_init(config_path: Option<&Path>, quiet: bool, force: bool) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let config_file = config_manager.config_path();

    if config_file.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            config_file.display()
        )));
    }

    config_manager.save_settings(&AppSettings::default())?;
    status(quiet, format_args!("Wrote {}", config_file.display()));
    Ok(())
}
