//! Key-value persistence
//!
//! Everything `teamgen` remembers between runs goes through a
//! [`KeyValueStore`]: the current display name, each user's saved players,
//! and the working roster. Values are JSON strings.

mod file;
mod library;
mod memory;
mod session;

pub use file::{FileStore, STORE_FILE_NAME};
pub use library::PlayerLibrary;
pub use memory::MemoryStore;
pub use session::{Session, WorkingRoster};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{StoreError, StoreResult};

/// Key holding the current display name
pub const USERNAME_KEY: &str = "teamgen_username";

/// Key holding the working roster
pub const ROSTER_KEY: &str = "teamgen_roster";

/// Key holding a user's saved players
#[must_use]
pub fn players_key(username: &str) -> String {
    format!("players_{username}")
}

/// String key-value storage capability
pub trait KeyValueStore {
    /// Reads a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes a value; deleting a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// Reads and decodes a JSON value
pub(crate) fn get_json<T, S>(store: &S, key: &str) -> StoreResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    store
        .get(key)?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

/// Encodes and writes a JSON value
pub(crate) fn set_json<T, S>(store: &mut S, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw =
        serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
    store.set(key, &raw)
}
