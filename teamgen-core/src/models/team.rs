//! Team assignment types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, BalanceResult};

use super::{Player, PlayerId, Roster};

/// Which of the two teams a player is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    /// The first team
    A,
    /// The second team
    B,
}

impl TeamSide {
    /// Both sides, A first
    pub const BOTH: [Self; 2] = [Self::A, Self::B];

    /// Display name of the team
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::A => "Team A",
            Self::B => "Team B",
        }
    }

    /// The opposing side
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Two distinct players chosen to anchor opposite teams.
///
/// The first captain seeds team A, the second seeds team B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptainPair {
    first: PlayerId,
    second: PlayerId,
}

impl CaptainPair {
    /// Creates a captain pair from two ids.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidCaptainSelection`] if both ids are the
    /// same player.
    pub fn new(first: PlayerId, second: PlayerId) -> BalanceResult<Self> {
        if first == second {
            return Err(BalanceError::InvalidCaptainSelection(
                "the two captains must be different players".to_string(),
            ));
        }
        Ok(Self { first, second })
    }

    /// Creates a captain pair from a selection list.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidCaptainSelection`] unless the list holds
    /// exactly two distinct ids.
    pub fn from_ids(ids: &[PlayerId]) -> BalanceResult<Self> {
        match ids {
            [first, second] => Self::new(*first, *second),
            _ => Err(BalanceError::InvalidCaptainSelection(format!(
                "please select exactly 2 captains (got {})",
                ids.len()
            ))),
        }
    }

    /// Checks that both captains belong to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::InvalidCaptainSelection`] naming the first
    /// captain that is not in the roster.
    pub fn validate(&self, roster: &Roster) -> BalanceResult<()> {
        for id in [self.first, self.second] {
            if !roster.contains(id) {
                return Err(BalanceError::InvalidCaptainSelection(format!(
                    "captain {id} is not in the roster"
                )));
            }
        }
        Ok(())
    }

    /// Captain seeding team A
    #[must_use]
    pub const fn first(&self) -> PlayerId {
        self.first
    }

    /// Captain seeding team B
    #[must_use]
    pub const fn second(&self) -> PlayerId {
        self.second
    }

    /// Returns true if `id` is one of the captains
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.first == id || self.second == id
    }
}

/// Result of dividing a roster into two teams
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAssignment {
    /// Players on team A, in assignment order
    pub team_a: Vec<Player>,
    /// Players on team B, in assignment order
    pub team_b: Vec<Player>,
}

impl TeamAssignment {
    /// Creates an assignment from two team lists
    #[must_use]
    pub fn new(team_a: Vec<Player>, team_b: Vec<Player>) -> Self {
        Self { team_a, team_b }
    }

    /// Players on the given side
    #[must_use]
    pub fn team(&self, side: TeamSide) -> &[Player] {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    /// Total number of assigned players
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }

    /// Absolute difference between the team sizes
    #[must_use]
    pub fn size_difference(&self) -> usize {
        self.team_a.len().abs_diff(self.team_b.len())
    }

    /// Side the player was assigned to, if any
    #[must_use]
    pub fn side_of(&self, id: PlayerId) -> Option<TeamSide> {
        if self.team_a.iter().any(|p| p.id == id) {
            Some(TeamSide::A)
        } else if self.team_b.iter().any(|p| p.id == id) {
            Some(TeamSide::B)
        } else {
            None
        }
    }

    /// Returns true if the player is on either team
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.side_of(id).is_some()
    }

    /// Returns true if both teams are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.team_a.is_empty() && self.team_b.is_empty()
    }
}
