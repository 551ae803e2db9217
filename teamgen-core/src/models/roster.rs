//! Roster of players
//!
//! The roster keeps insertion order for display and guarantees that no two
//! players share an id or a name (case-sensitive exact match).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RosterError, RosterResult};

use super::{CaptainPair, Player, PlayerId};

/// An ordered, duplicate-free list of players
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Creates an empty roster
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from a list of players.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate name or id encountered.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> RosterResult<Self> {
        let mut roster = Self::new();
        for player in players {
            roster.add(player)?;
        }
        Ok(roster)
    }

    /// Appends a player.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateId`] or [`RosterError::DuplicateName`]
    /// if the player clashes with an existing one. The roster is unchanged
    /// on error.
    pub fn add(&mut self, player: Player) -> RosterResult<&Player> {
        if self.contains(player.id) {
            return Err(RosterError::DuplicateId(player.id));
        }
        if self.players.iter().any(|p| p.name == player.name) {
            return Err(RosterError::DuplicateName(player.name));
        }
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    /// Removes a player by id, returning it if present
    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }

    /// Replaces the player with the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::PlayerNotFound`] if no player has that id, or
    /// [`RosterError::DuplicateName`] if the new name belongs to another
    /// player.
    pub fn update(&mut self, player: Player) -> RosterResult<()> {
        if self
            .players
            .iter()
            .any(|p| p.id != player.id && p.name == player.name)
        {
            return Err(RosterError::DuplicateName(player.name));
        }
        let slot = self
            .players
            .iter_mut()
            .find(|p| p.id == player.id)
            .ok_or_else(|| RosterError::PlayerNotFound(player.id.to_string()))?;
        *slot = player;
        Ok(())
    }

    /// Returns the player with the given id
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Returns true if a player with the given id is present
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// Finds a player by name or id.
    ///
    /// Tries an exact name, then a UUID, then a case-insensitive name, then
    /// a unique case-insensitive prefix.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::PlayerNotFound`] when nothing matches and
    /// [`RosterError::AmbiguousPlayer`] when a prefix matches several players.
    pub fn find(&self, name_or_id: &str) -> RosterResult<&Player> {
        if let Some(player) = self.players.iter().find(|p| p.name == name_or_id) {
            return Ok(player);
        }

        if let Ok(uuid) = Uuid::parse_str(name_or_id) {
            if let Some(player) = self.get(PlayerId::from_uuid(uuid)) {
                return Ok(player);
            }
        }

        let query = name_or_id.to_lowercase();
        if let Some(player) = self
            .players
            .iter()
            .find(|p| p.name.to_lowercase() == query)
        {
            return Ok(player);
        }

        let matches: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| p.name.to_lowercase().starts_with(&query))
            .collect();

        match matches.as_slice() {
            [] => Err(RosterError::PlayerNotFound(name_or_id.to_string())),
            [only] => Ok(*only),
            _ => Err(RosterError::AmbiguousPlayer {
                query: name_or_id.to_string(),
                matches: matches.iter().map(|p| p.name.clone()).collect(),
            }),
        }
    }

    /// Flags the two captains and clears the flag on everyone else
    pub fn mark_captains(&mut self, pair: &CaptainPair) {
        for player in &mut self.players {
            player.is_captain = pair.contains(player.id);
        }
    }

    /// Clears the captain flag on every player
    pub fn clear_captains(&mut self) {
        for player in &mut self.players {
            player.is_captain = false;
        }
    }

    /// Removes every player
    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Players in insertion order
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterates players in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Number of players
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if the roster has no players
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl TryFrom<Vec<Player>> for Roster {
    type Error = RosterError;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        Self::from_players(players)
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Self {
        roster.players
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
