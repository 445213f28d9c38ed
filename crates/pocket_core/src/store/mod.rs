//! Local persistent medium contract.
//!
//! # Responsibility
//! - Define the string-keyed get/set/remove contract every component persists
//!   through.
//! - Own the soft-read policy: absent medium, absent key and undecodable data
//!   all read as "no prior data".
//!
//! # Invariants
//! - `set` replaces the whole value for a key in one write.
//! - A successful `set` is visible to every later `get` on the same medium.
//! - Soft reads never propagate an error to their caller.

use crate::db::DbError;
use log::warn;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory_store;
mod sqlite_store;

pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

/// Keys used by the organizer inside the local medium.
pub mod keys {
    /// JSON array of notes, most recently created first.
    pub const NOTES: &str = "katya-notes";
    /// JSON settings object.
    pub const SETTINGS: &str = "katya-settings";
    /// Plain playlist reference, stored verbatim.
    pub const PLAYLIST: &str = "katya-spotify";
    /// Emotion game score as a decimal string.
    pub const SCORE: &str = "katya-emotion-score";
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level failure of the local medium.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Medium cannot serve requests (closed, poisoned, not configured).
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(reason) => write!(f, "local store unavailable: {reason}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String-keyed durable key-value medium.
pub trait PersistentStore {
    /// Returns the raw value for `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// Reads a raw value with the soft-fail policy.
///
/// Medium errors are logged and reported as absent.
pub fn read_raw<S: PersistentStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "event=store_read module=store status=soft_fail key={} reason=unavailable error={}",
                key, err
            );
            None
        }
    }
}

/// Reads and decodes a JSON value with the soft-fail policy.
///
/// Returns `None` when the key is absent, the medium fails, or the stored text
/// does not decode as `T`.
pub fn read_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: PersistentStore + ?Sized,
{
    let raw = read_raw(store, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                "event=store_read module=store status=soft_fail key={} reason=malformed error={}",
                key, err
            );
            None
        }
    }
}
