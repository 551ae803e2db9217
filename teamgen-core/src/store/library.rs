//! Per-user saved players

use crate::error::{StoreError, StoreResult};
use crate::models::{Player, PlayerId};
use crate::search::filter_players;

use super::{KeyValueStore, get_json, players_key, set_json};

/// A user's saved players, stored under `players_{username}`
#[derive(Debug)]
pub struct PlayerLibrary<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
    username: String,
}

impl<'a, S: KeyValueStore + ?Sized> PlayerLibrary<'a, S> {
    /// Opens the library of `username`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyUsername`] for a blank name.
    pub fn new(store: &'a mut S, username: &str) -> StoreResult<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StoreError::EmptyUsername);
        }
        Ok(Self {
            store,
            username: username.to_string(),
        })
    }

    /// Owner of this library
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// All saved players; empty if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds invalid JSON.
    pub fn load(&self) -> StoreResult<Vec<Player>> {
        Ok(get_json(&*self.store, &players_key(&self.username))?.unwrap_or_default())
    }

    /// Replaces every saved player.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&mut self, players: &[Player]) -> StoreResult<()> {
        set_json(self.store, &players_key(&self.username), players)?;
        tracing::debug!(count = players.len(), "Player library saved");
        Ok(())
    }

    /// Saves a player unless one with the same name is already stored.
    ///
    /// Returns whether the player was added.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn add(&mut self, player: &Player) -> StoreResult<bool> {
        let mut players = self.load()?;
        if players.iter().any(|p| p.name == player.name) {
            return Ok(false);
        }
        let mut stored = player.clone();
        stored.is_captain = false;
        players.push(stored);
        self.save(&players)?;
        Ok(true)
    }

    /// Replaces the saved player with the same id.
    ///
    /// Returns whether a stored player was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn update(&mut self, player: &Player) -> StoreResult<bool> {
        let mut players = self.load()?;
        let Some(slot) = players.iter_mut().find(|p| p.id == player.id) else {
            return Ok(false);
        };
        slot.name.clone_from(&player.name);
        slot.category = player.category;
        self.save(&players)?;
        Ok(true)
    }

    /// Deletes the saved player with the given id.
    ///
    /// Returns whether a player was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn delete(&mut self, id: PlayerId) -> StoreResult<bool> {
        let mut players = self.load()?;
        let before = players.len();
        players.retain(|p| p.id != id);
        if players.len() == before {
            return Ok(false);
        }
        self.save(&players)?;
        Ok(true)
    }

    /// Saved players whose name contains `query`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn search(&self, query: &str) -> StoreResult<Vec<Player>> {
        let players = self.load()?;
        Ok(filter_players(&players, query).into_iter().cloned().collect())
    }
}
