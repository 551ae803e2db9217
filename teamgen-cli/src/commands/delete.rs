//! Delete player command.

use std::path::Path;

use teamgen_core::store::PlayerLibrary;

use crate::error::CliError;
use crate::util::{current_user, load_roster, locate_player, open_store, save_roster, status};

/// Delete player command handler
///
/// Removes the player from the roster and, when logged in, from the saved
/// library.
pub fn cmd_delete(config_path: Option<&Path>, quiet: bool, player: &str) -> Result<(), CliError> {
    let mut store = open_store(config_path)?;
    let username = current_user(&mut store)?;
    let mut roster = load_roster(&mut store)?;
    let saved = match &username {
        Some(user) => PlayerLibrary::new(&mut store, user)?.load()?,
        None => Vec::new(),
    };

    let target = locate_player(&roster, &saved, player)?;

    let in_roster = roster.remove(target.id).is_some();
    if in_roster {
        save_roster(&mut store, &roster)?;
    }
    let in_library = match &username {
        Some(user) => PlayerLibrary::new(&mut store, user)?.delete(target.id)?,
        None => false,
    };

    let places = match (in_roster, in_library) {
        (true, true) => "roster and library",
        (true, false) => "roster",
        _ => "library",
    };
    status(
        quiet,
        format_args!("Deleted '{}' (ID: {}) from the {places}", target.name, target.id),
    );
    Ok(())
}
