//! Shared utility functions used across command modules.

use std::path::Path;

use teamgen_core::config::ConfigManager;
use teamgen_core::export::ExportFormat;
use teamgen_core::error::RosterError;
use teamgen_core::models::{Category, Player, Roster};
use teamgen_core::store::{FileStore, Session, WorkingRoster};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Opens the persistent store in the configuration directory
pub fn open_store(config_path: Option<&Path>) -> Result<FileStore, CliError> {
    let config_manager = create_config_manager(config_path)?;
    Ok(config_manager.open_store()?)
}

/// Loads the working roster
pub fn load_roster(store: &mut FileStore) -> Result<Roster, CliError> {
    Ok(WorkingRoster::new(store).load()?)
}

/// Saves the working roster
pub fn save_roster(store: &mut FileStore, roster: &Roster) -> Result<(), CliError> {
    Ok(WorkingRoster::new(store).save(roster)?)
}

/// Logged-in user, if any
pub fn current_user(store: &mut FileStore) -> Result<Option<String>, CliError> {
    Ok(Session::new(store).current_user()?)
}

/// Logged-in user, or `CliError::NotLoggedIn`
pub fn require_user(store: &mut FileStore) -> Result<String, CliError> {
    current_user(store)?.ok_or(CliError::NotLoggedIn)
}

/// Finds a player in the roster, falling back to the saved library
pub fn locate_player(roster: &Roster, saved: &[Player], query: &str) -> Result<Player, CliError> {
    match roster.find(query) {
        Ok(player) => Ok(player.clone()),
        Err(RosterError::PlayerNotFound(_)) if !saved.is_empty() => {
            let library = Roster::from_players(saved.iter().cloned())
                .map_err(|e| CliError::Store(format!("Saved players are inconsistent: {e}")))?;
            Ok(library.find(query)?.clone())
        }
        Err(e) => Err(e.into()),
    }
}

/// Parses a category argument
pub fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e: RosterError| e.to_string())
}

/// Parses an export format argument
pub fn parse_export_format(s: &str) -> Result<ExportFormat, String> {
    s.parse()
}

/// Prints a status message unless `--quiet` was given
pub fn status(quiet: bool, message: impl std::fmt::Display) {
    if !quiet {
        println!("{message}");
    }
}

/// Formats a player count with the right noun
pub fn players_label(count: usize) -> String {
    if count == 1 {
        "1 player".to_string()
    } else {
        format!("{count} players")
    }
}
