//! Display-name session and working roster
//!
//! There is no authentication: any non-empty name is accepted and simply
//! selects which saved-player library is used. Logging in or out clears the
//! working roster.

use crate::error::{StoreError, StoreResult};
use crate::models::Roster;

use super::{KeyValueStore, PlayerLibrary, ROSTER_KEY, USERNAME_KEY, get_json, set_json};

/// Current display name
#[derive(Debug)]
pub struct Session<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> Session<'a, S> {
    /// Wraps a store
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Name of the logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn current_user(&self) -> StoreResult<Option<String>> {
        Ok(self
            .store
            .get(USERNAME_KEY)?
            .filter(|name| !name.trim().is_empty()))
    }

    /// Logs in as `username` and clears the working roster.
    ///
    /// Returns the trimmed name that was stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyUsername`] for a blank name, or a storage
    /// error.
    pub fn login(&mut self, username: &str) -> StoreResult<String> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StoreError::EmptyUsername);
        }
        self.store.set(USERNAME_KEY, username)?;
        WorkingRoster::new(&mut *self.store).clear()?;
        tracing::info!(username, "Logged in");
        Ok(username.to_string())
    }

    /// Logs out and clears the working roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.store.remove(USERNAME_KEY)?;
        WorkingRoster::new(&mut *self.store).clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Library of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotLoggedIn`] when nobody is logged in.
    pub fn library(&mut self) -> StoreResult<PlayerLibrary<'_, S>> {
        let username = self.current_user()?.ok_or(StoreError::NotLoggedIn)?;
        PlayerLibrary::new(&mut *self.store, &username)
    }
}

/// Players currently selected for division
#[derive(Debug)]
pub struct WorkingRoster<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> WorkingRoster<'a, S> {
    /// Wraps a store
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Loads the roster; empty if none was saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored roster is invalid,
    /// including duplicate names or unknown categories.
    pub fn load(&self) -> StoreResult<Roster> {
        Ok(get_json(&*self.store, ROSTER_KEY)?.unwrap_or_default())
    }

    /// Saves the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&mut self, roster: &Roster) -> StoreResult<()> {
        set_json(self.store, ROSTER_KEY, roster)
    }

    /// Removes the saved roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.store.remove(ROSTER_KEY)
    }
}
