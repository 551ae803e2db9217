//! Versioned JSON export document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::models::{Player, TeamAssignment};

/// Current version of the JSON export format
pub const TEAMS_FORMAT_VERSION: u32 = 1;

/// JSON document describing one division
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsExport {
    /// Format version
    pub version: u32,
    /// Export timestamp
    pub exported_at: DateTime<Utc>,
    /// Version of `teamgen` that wrote the document
    pub app_version: String,
    /// Players on team A
    pub team_a: Vec<Player>,
    /// Players on team B
    pub team_b: Vec<Player>,
}

impl TeamsExport {
    /// Wraps an assignment with the current version and timestamp
    #[must_use]
    pub fn new(assignment: TeamAssignment) -> Self {
        Self {
            version: TEAMS_FORMAT_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            team_a: assignment.team_a,
            team_b: assignment.team_b,
        }
    }

    /// Serializes to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialization(e.to_string()))
    }

    /// Parses a document, rejecting versions newer than this build.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialization`] for malformed JSON or an
    /// unsupported version.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let export: Self =
            serde_json::from_str(json).map_err(|e| ExportError::Serialization(e.to_string()))?;
        if export.version > TEAMS_FORMAT_VERSION {
            return Err(ExportError::Serialization(format!(
                "unsupported format version {} (current: {TEAMS_FORMAT_VERSION})",
                export.version
            )));
        }
        Ok(export)
    }

    /// The exported teams
    #[must_use]
    pub fn into_assignment(self) -> TeamAssignment {
        TeamAssignment::new(self.team_a, self.team_b)
    }
}
