//! Journal database file: location, schema and failure modes.
//!
//! The journal lives in a single SQLite file holding the `kv_entries`
//! table. Opening it creates the data directory when needed and brings the
//! schema up to date; a file written by a newer build is refused untouched.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Why the journal database could not be opened or used.
#[derive(Debug)]
pub enum DbError {
    /// Driver-level failure (I/O, locking, malformed file).
    Sqlite(rusqlite::Error),
    /// Directory meant to hold the journal file could not be created.
    DataDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Journal was written by a build with a newer schema.
    JournalTooNew { found: u32, supported: u32 },
}

impl DbError {
    /// Stable identifier used as `error_code` in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "journal_sqlite",
            Self::DataDir { .. } => "journal_data_dir",
            Self::JournalTooNew { .. } => "journal_too_new",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "journal storage error: {err}"),
            Self::DataDir { path, source } => {
                write!(f, "cannot create journal directory `{}`: {source}", path.display())
            }
            Self::JournalTooNew { found, supported } => write!(
                f,
                "journal uses schema {found} but this build reads up to {supported}; upgrade to open it"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::DataDir { source, .. } => Some(source),
            Self::JournalTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
