//! Remove and clear commands for the working roster.

use std::path::Path;

use crate::error::CliError;
use crate::util::{load_roster, open_store, players_label, save_roster, status};

/// Remove player command handler
pub fn cmd_remove(config_path: Option<&Path>, quiet: bool, player: &str) -> Result<(), CliError> {
    let mut store = open_store(config_path)?;
    let mut roster = load_roster(&mut store)?;

    let id = roster.find(player)?.id;
    let removed = roster
        .remove(id)
        .ok_or_else(|| CliError::Validation(format!("player not found: {player}")))?;
    save_roster(&mut store, &roster)?;

    status(
        quiet,
        format_args!(
            "Removed '{}' from the roster ({} left)",
            removed.name,
            players_label(roster.len())
        ),
    );
    Ok(())
}

/// Clear roster command handler
pub fn cmd_clear(config_path: Option<&Path>, quiet: bool) -> Result<(), CliError> {
    let mut store = open_store(config_path)?;
    let mut roster = load_roster(&mut store)?;
    let count = roster.len();
    roster.clear();
    save_roster(&mut store, &roster)?;

    status(
        quiet,
        format_args!("Cleared the roster ({} removed)", players_label(count)),
    );
    Ok(())
}
