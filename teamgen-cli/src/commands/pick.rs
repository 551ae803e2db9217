//! Pick a saved player command.

use std::path::Path;

use teamgen_core::models::Roster;
use teamgen_core::store::PlayerLibrary;

use crate::error::CliError;
use crate::util::{load_roster, open_store, players_label, require_user, save_roster, status};

/// Pick command handler
///
/// Copies a player from the library into the roster, keeping its id so that
/// later edits and deletes reach both.
pub fn cmd_pick(config_path: Option<&Path>, quiet: bool, name: &str) -> Result<(), CliError> {
    let mut store = open_store(config_path)?;
    let username = require_user(&mut store)?;

    let saved = PlayerLibrary::new(&mut store, &username)?.load()?;
    let library = Roster::from_players(saved)
        .map_err(|e| CliError::Store(format!("Saved players are inconsistent: {e}")))?;
    let mut player = library.find(name)?.clone();
    player.is_captain = false;

    let mut roster = load_roster(&mut store)?;
    roster.add(player.clone())?;
    save_roster(&mut store, &roster)?;

    status(
        quiet,
        format_args!(
            "Added {} to the roster ({})",
            player.display_label(),
            players_label(roster.len())
        ),
    );
    Ok(())
}
