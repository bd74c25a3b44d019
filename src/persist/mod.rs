//! Durable key-value persistence for roster state.

/// SQLite implementation of the key-value store.
pub mod sqlite;

use thiserror::Error;

/// Persistence failure.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying SQLite failure.
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Roster JSON failed to serialize.
    #[error("serde: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Alias for persistence results.
pub type PersistResult<T> = Result<T, PersistError>;

/// Durable string-keyed store the engine reads from and writes to.
///
/// The engine keeps the serialized roster under one key and the event name
/// under another; it is agnostic to the backing medium as long as values
/// round-trip.
pub trait KvStore: Send {
    /// Returns the stored value for `key`, or `default` when absent.
    fn get_string(&self, key: &str, default: &str) -> PersistResult<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put_string(&mut self, key: &str, value: &str) -> PersistResult<()>;

    /// Removes every stored key.
    fn clear(&mut self) -> PersistResult<()>;
}
