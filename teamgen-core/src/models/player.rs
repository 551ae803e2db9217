//! Player model
//!
//! A player has a stable id, a display name and a skill category. The
//! captain flag is set by the caller after a captain pair is chosen; the
//! balancer itself never writes it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RosterError, RosterResult};

/// Unique identifier for a player.
///
/// Assigned once when the player is created and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Creates a new random player ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a player ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Skill category used to balance teams beyond raw headcount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Specialist batter
    #[default]
    Batsman,
    /// Specialist bowler
    Bowler,
    /// Bats and bowls
    AllRounder,
}

impl Category {
    /// Every category, in the order the balancer distributes them
    pub const ALL: [Self; 3] = [Self::Batsman, Self::Bowler, Self::AllRounder];

    /// Stable identifier used in storage and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Batsman => "batsman",
            Self::Bowler => "bowler",
            Self::AllRounder => "all-rounder",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Batsman => "Batsman",
            Self::Bowler => "Bowler",
            Self::AllRounder => "All-rounder",
        }
    }

    /// Icon shown next to the player's name
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Batsman => "🏏",
            Self::Bowler => "🥎",
            Self::AllRounder => "⭐",
        }
    }
}

impl FromStr for Category {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "batsman" => Ok(Self::Batsman),
            "bowler" => Ok(Self::Bowler),
            "all-rounder" => Ok(Self::AllRounder),
            _ => Err(RosterError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A participant that can be placed on a team
///
/// Deserialization applies the same name rules as [`Player::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredPlayer")]
pub struct Player {
    /// Unique identifier
    pub id: PlayerId,
    /// Display name, never empty
    pub name: String,
    /// Skill category
    pub category: Category,
    /// Whether the player captains a team in the current division
    #[serde(default)]
    pub is_captain: bool,
}

impl Player {
    /// Creates a new player with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyName`] if `name` is blank.
    pub fn new(name: impl AsRef<str>, category: Category) -> RosterResult<Self> {
        Ok(Self {
            id: PlayerId::new(),
            name: normalize_name(name.as_ref())?,
            category,
            is_captain: false,
        })
    }

    /// Creates a new player from a category string.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyName`] for a blank name and
    /// [`RosterError::UnknownCategory`] for an unrecognized category.
    pub fn parse(name: impl AsRef<str>, category: &str) -> RosterResult<Self> {
        let category = category.parse()?;
        Self::new(name, category)
    }

    /// Renames the player, keeping the id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyName`] if `name` is blank.
    pub fn rename(&mut self, name: impl AsRef<str>) -> RosterResult<()> {
        self.name = normalize_name(name.as_ref())?;
        Ok(())
    }

    /// Name prefixed with the category icon, plus a crown for captains
    #[must_use]
    pub fn display_label(&self) -> String {
        if self.is_captain {
            format!("{} {} 👑", self.category.icon(), self.name)
        } else {
            format!("{} {}", self.category.icon(), self.name)
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Unchecked wire form of [`Player`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPlayer {
    id: PlayerId,
    name: String,
    category: Category,
    #[serde(default)]
    is_captain: bool,
}

impl TryFrom<StoredPlayer> for Player {
    type Error = RosterError;

    fn try_from(stored: StoredPlayer) -> RosterResult<Self> {
        Ok(Self {
            id: stored.id,
            name: normalize_name(&stored.name)?,
            category: stored.category,
            is_captain: stored.is_captain,
        })
    }
}

fn normalize_name(name: &str) -> RosterResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RosterError::EmptyName);
    }
    Ok(trimmed.to_string())
}
