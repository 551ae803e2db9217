//! Export of divided teams
//!
//! Renders a [`TeamAssignment`] as plain text, Markdown, JSON, or an SVG
//! card, and writes the result to disk.

mod json;
mod svg;
mod text;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use json::{TEAMS_FORMAT_VERSION, TeamsExport};

use crate::error::ExportError;
use crate::models::TeamAssignment;

/// Base name of the default export file
pub const DEFAULT_EXPORT_STEM: &str = "teams";

/// Output format for exported teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Plain text listing
    #[default]
    Text,
    /// Markdown with a section per team
    Markdown,
    /// Versioned JSON document
    Json,
    /// Two-column SVG card
    Svg,
}

impl ExportFormat {
    /// Every format
    pub const ALL: [Self; 4] = [Self::Text, Self::Markdown, Self::Json, Self::Svg];

    /// File extension without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }

    /// Canonical name, as accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }

    /// Default file name, e.g. `teams.svg`
    #[must_use]
    pub fn default_file_name(self) -> String {
        format!("{DEFAULT_EXPORT_STEM}.{}", self.extension())
    }

    /// Guesses the format from a path's extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.extension() == ext || (ext == "markdown" && *f == Self::Markdown))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "svg" => Ok(Self::Svg),
            other => Err(format!(
                "unknown export format '{other}' (expected text, markdown, json or svg)"
            )),
        }
    }
}

/// Renders the assignment in the given format.
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] if JSON encoding fails.
pub fn render(assignment: &TeamAssignment, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Text => Ok(text::render_text(assignment)),
        ExportFormat::Markdown => Ok(text::render_markdown(assignment)),
        ExportFormat::Json => TeamsExport::new(assignment.clone()).to_json(),
        ExportFormat::Svg => Ok(svg::render_svg(assignment)),
    }
}

/// Renders the assignment and writes it to `path`, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn export_to_file(
    assignment: &TeamAssignment,
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let _span = crate::trace_operation!(
        crate::tracing::span_names::EXPORT_EXECUTE,
        format = %format,
        path = %path.display(),
        player_count = assignment.total_len()
    )
    .entered();

    let rendered = render(assignment, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, rendered)?;
    tracing::info!(path = %path.display(), "Teams exported");
    Ok(())
}
