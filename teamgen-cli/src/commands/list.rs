//! List roster command.

use std::path::Path;

use teamgen_core::models::Player;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::format_players;
use crate::util::{load_roster, open_store};

/// List roster command handler
pub fn cmd_list(config_path: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    let mut store = open_store(config_path)?;
    let roster = load_roster(&mut store)?;

    let players: Vec<&Player> = roster.iter().collect();
    println!("{}", format_players(&players, format)?);
    Ok(())
}
