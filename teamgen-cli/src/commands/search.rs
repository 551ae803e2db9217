//! Search saved players command.

use std::path::Path;

use teamgen_core::models::Category;
use teamgen_core::search::{filter_by_category, filter_players};
use teamgen_core::store::PlayerLibrary;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::format_players;
use crate::util::{open_store, require_user};

/// Search command handler
pub fn cmd_search(
    config_path: Option<&Path>,
    query: Option<&str>,
    category: Option<Category>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut store = open_store(config_path)?;
    let username = require_user(&mut store)?;
    let saved = PlayerLibrary::new(&mut store, &username)?.load()?;

    let query = query.unwrap_or_default();
    let found = match category {
        Some(category) => filter_by_category(&saved, query, category),
        None => filter_players(&saved, query),
    };
    tracing::debug!(
        query,
        category = category.map(Category::as_str),
        result_count = found.len(),
        "Library searched"
    );
    println!("{}", format_players(&found, format)?);
    Ok(())
}
