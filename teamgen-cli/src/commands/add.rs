//! Add player command.

use std::path::Path;

use teamgen_core::models::{Category, Player};
use teamgen_core::store::PlayerLibrary;

use crate::error::CliError;
use crate::util::{load_roster, open_store, players_label, require_user, save_roster, status};

/// Add player command handler
pub fn cmd_add(
    config_path: Option<&Path>,
    quiet: bool,
    name: &str,
    category: Category,
    save: bool,
) -> Result<(), CliError> {
    let player = Player::new(name, category)?;

    let mut store = open_store(config_path)?;
    // --save without a login must fail before the roster changes
    let username = if save {
        Some(require_user(&mut store)?)
    } else {
        None
    };

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

    if let Some(username) = username {
        if PlayerLibrary::new(&mut store, &username)?.add(&player)? {
            status(quiet, format_args!("Saved '{}' to your library", player.name));
        } else {
            status(
                quiet,
                format_args!("'{}' is already in your library", player.name),
            );
        }
    }

    Ok(())
}
