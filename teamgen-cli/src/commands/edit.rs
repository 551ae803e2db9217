//! Edit player command.

use std::path::Path;

use teamgen_core::error::RosterError;
use teamgen_core::models::Category;
use teamgen_core::store::PlayerLibrary;

use crate::error::CliError;
use crate::util::{current_user, load_roster, locate_player, open_store, save_roster, status};

/// Edit player command handler
///
/// Applies to the roster and, when logged in, to the saved library.
pub fn cmd_edit(
    config_path: Option<&Path>,
    quiet: bool,
    player: &str,
    new_name: Option<&str>,
    category: Option<Category>,
) -> Result<(), CliError> {
    if new_name.is_none() && category.is_none() {
        return Err(CliError::Validation(
            "nothing to change: pass --name and/or --category".to_string(),
        ));
    }

    let mut store = open_store(config_path)?;
    let username = current_user(&mut store)?;
    let mut roster = load_roster(&mut store)?;
    let saved = match &username {
        Some(user) => PlayerLibrary::new(&mut store, user)?.load()?,
        None => Vec::new(),
    };

    let original = locate_player(&roster, &saved, player)?;
    let mut updated = original.clone();
    if let Some(name) = new_name {
        updated.rename(name)?;
    }
    if let Some(category) = category {
        updated.category = category;
    }

    if saved
        .iter()
        .any(|p| p.id != updated.id && p.name == updated.name)
    {
        return Err(RosterError::DuplicateName(updated.name).into());
    }

    let in_roster = roster.contains(updated.id);
    if in_roster {
        roster.update(updated.clone())?;
        save_roster(&mut store, &roster)?;
    }
    let in_library = match &username {
        Some(user) => PlayerLibrary::new(&mut store, user)?.update(&updated)?,
        None => false,
    };

    let places = match (in_roster, in_library) {
        (true, true) => "roster and library",
        (true, false) => "roster",
        _ => "library",
    };
    status(
        quiet,
        format_args!(
            "Updated '{}' to {} in the {places}",
            original.name,
            updated.display_label()
        ),
    );
    Ok(())
}
