//! Login, logout and whoami commands.

use std::path::Path;

use teamgen_core::store::{PlayerLibrary, Session};

use crate::error::CliError;
use crate::util::{current_user, open_store, players_label, status};

/// Login command handler
pub fn cmd_login(config_path: Option<&Path>, quiet: bool, name: &str) -> Result<(), CliError> {
    let mut store = open_store(config_path)?;
    let username = Session::new(&mut store).login(name)?;
    let saved = PlayerLibrary::new(&mut store, &username)?.load()?.len();

    status(
        quiet,
        format_args!("Logged in as '{username}' ({} saved)", players_label(saved)),
    );
    Ok(())
}

/// Logout command handler
pub fn cmd_logout(config_path: Option<&Path>, quiet: bool) -> Result<(), CliError> {
    let mut store = open_store(config_path)?;
    let previous = current_user(&mut store)?;
    Session::new(&mut store).logout()?;

    match previous {
        Some(name) => status(quiet, format_args!("Logged out '{name}'")),
        None => status(quiet, "Not logged in"),
    }
    Ok(())
}

/// Whoami command handler
pub fn cmd_whoami(config_path: Option<&Path>) -> Result<(), CliError> {
    let mut store = open_store(config_path)?;
    match current_user(&mut store)? {
        Some(name) => {
            println!("{name}");
            Ok(())
        }
        None => Err(CliError::NotLoggedIn),
    }
}
