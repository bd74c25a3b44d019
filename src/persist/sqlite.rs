//! SQLite-backed key-value store.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::{KvStore, PersistResult};

/// SQLite implementation of [`crate::persist::KvStore`].
///
/// One `kv` table keyed by string; see `schema.sql`.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Opens or creates a store at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory store.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> PersistResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }
}

impl KvStore for SqliteKvStore {
    fn get_string(&self, key: &str, default: &str) -> PersistResult<String> {
        let value: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value.unwrap_or_else(|| default.to_string()))
    }

    fn put_string(&mut self, key: &str, value: &str) -> PersistResult<()> {
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn clear(&mut self) -> PersistResult<()> {
        self.conn.execute("DELETE FROM kv", [])?;
        Ok(())
    }
}
