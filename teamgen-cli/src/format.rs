//! Output formatting shared by list-style commands.

use std::fmt::Write as _;

use teamgen_core::models::Player;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Quotes a CSV field if it contains a delimiter, quote or line break
#[must_use]
pub fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Formats players in the requested format
pub fn format_players(players: &[&Player], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(format_table(players)),
        OutputFormat::Json => format_json(players),
        OutputFormat::Csv => Ok(format_csv(players)),
    }
}

/// Format players as a table string
#[must_use]
pub fn format_table(players: &[&Player]) -> String {
    if players.is_empty() {
        return "No players found.".to_string();
    }

    let mut output = String::new();

    let name_width = players
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let category_width = "all-rounder".len();

    let _ = writeln!(
        output,
        "{:<name_width$}  {:<category_width$}  {:<7}  ID",
        "NAME", "CATEGORY", "CAPTAIN"
    );
    let _ = writeln!(
        output,
        "{:-<name_width$}  {:-<category_width$}  {:-<7}  {:-<36}",
        "", "", "", ""
    );

    for player in players {
        let captain = if player.is_captain { "yes" } else { "" };
        let _ = writeln!(
            output,
            "{:<name_width$}  {:<category_width$}  {:<7}  {}",
            player.name,
            player.category.as_str(),
            captain,
            player.id
        );
    }

    output.trim_end().to_string()
}

/// Format players as a JSON array
///
/// # Errors
///
/// Returns `CliError::Config` if JSON serialization fails.
pub fn format_json(players: &[&Player]) -> Result<String, CliError> {
    serde_json::to_string_pretty(players)
        .map_err(|e| CliError::Config(format!("Failed to serialize to JSON: {e}")))
}

/// Format players as CSV
#[must_use]
pub fn format_csv(players: &[&Player]) -> String {
    let mut output = String::from("id,name,category,captain\n");

    for player in players {
        let _ = writeln!(
            output,
            "{},{},{},{}",
            player.id,
            escape_csv_field(&player.name),
            player.category.as_str(),
            player.is_captain
        );
    }

    output.trim_end().to_string()
}
