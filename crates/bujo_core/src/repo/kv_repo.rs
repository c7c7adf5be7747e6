//! Raw key-value repository contracts and implementations.
//!
//! # Responsibility
//! - Map stable string keys to raw JSON text.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `put_raw` replaces the whole value under a key; there are no partial writes.
//! - Repositories never interpret the stored text; decoding belongs to the store.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error raised by raw key-value access.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Backing storage refused the operation (disabled, quota exceeded).
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract behind the durable key-value store.
pub trait KvRepository {
    /// Returns the raw text stored under `key`, or `None` when absent.
    fn get_raw(&self, key: &str) -> RepoResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn put_raw(&self, key: &str, value: &str) -> RepoResult<()>;
    /// Deletes `key`; returns whether a value existed.
    fn remove_raw(&self, key: &str) -> RepoResult<bool>;
    /// Lists stored keys in ascending order.
    fn keys(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed key-value repository over the `kv_entries` table.
pub struct SqliteKvRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvRepository for SqliteKvRepository<'_> {
    fn get_raw(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_raw(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(changed > 0)
    }

    fn keys(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_entries ORDER BY key ASC;")?;
        let mut rows = stmt.query([])?;
        let mut keys = Vec::new();
        while let Some(row) = rows.next()? {
            keys.push(row.get(0)?);
        }
        Ok(keys)
    }
}

/// Process-local repository used for ephemeral sessions and tests.
///
/// Reads and writes can be switched off independently to reproduce a
/// storage that is locked or rejects persistence (quota exceeded, storage
/// disabled).
#[derive(Debug, Default)]
pub struct MemoryKvRepository {
    entries: RefCell<BTreeMap<String, String>>,
    reject_reads: Cell<bool>,
    reject_writes: Cell<bool>,
}

impl MemoryKvRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository pre-filled with raw text values.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let repo = Self::new();
        repo.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        repo
    }

    /// Makes every following `put_raw`/`remove_raw` fail with `Unavailable`.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Makes every following `get_raw`/`keys` fail with `Unavailable`.
    pub fn set_reject_reads(&self, reject: bool) {
        self.reject_reads.set(reject);
    }

    fn ensure_readable(&self) -> RepoResult<()> {
        if self.reject_reads.get() {
            return Err(RepoError::Unavailable(
                "memory repository rejects reads".to_string(),
            ));
        }
        Ok(())
    }

    fn ensure_writable(&self) -> RepoResult<()> {
        if self.reject_writes.get() {
            return Err(RepoError::Unavailable(
                "memory repository rejects writes".to_string(),
            ));
        }
        Ok(())
    }
}

impl KvRepository for MemoryKvRepository {
    fn get_raw(&self, key: &str) -> RepoResult<Option<String>> {
        self.ensure_readable()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put_raw(&self, key: &str, value: &str) -> RepoResult<()> {
        self.ensure_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> RepoResult<bool> {
        self.ensure_writable()?;
        Ok(self.entries.borrow_mut().remove(key).is_some())
    }

    fn keys(&self) -> RepoResult<Vec<String>> {
        self.ensure_readable()?;
        Ok(self.entries.borrow().keys().cloned().collect())
    }
}

impl<R: KvRepository + ?Sized> KvRepository for &R {
    fn get_raw(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get_raw(key)
    }

    fn put_raw(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).put_raw(key, value)
    }

    fn remove_raw(&self, key: &str) -> RepoResult<bool> {
        (**self).remove_raw(key)
    }

    fn keys(&self) -> RepoResult<Vec<String>> {
        (**self).keys()
    }
}

#[cfg(test)]
mod tests {
    use super::{KvRepository, MemoryKvRepository, RepoError};

    #[test]
    fn memory_repository_rejects_writes_when_switched_off() {
        let repo = MemoryKvRepository::with_entries([("a", "1")]);
        repo.set_reject_writes(true);

        let err = repo.put_raw("a", "2").unwrap_err();
        assert!(matches!(err, RepoError::Unavailable(_)));
        assert_eq!(repo.get_raw("a").unwrap().as_deref(), Some("1"));

        repo.set_reject_writes(false);
        repo.put_raw("a", "2").unwrap();
        assert_eq!(repo.get_raw("a").unwrap().as_deref(), Some("2"));
    }
}
