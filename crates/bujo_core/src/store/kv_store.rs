//! Typed JSON access over a raw key-value repository.
//!
//! # Responsibility
//! - Serialize slice values to JSON text and back.
//! - Turn storage and decoding failures into logged fallbacks.
//!
//! # Invariants
//! - `read` returns the caller's default whenever the stored value is
//!   absent, unreadable or not valid JSON for `T`.
//! - `write` never propagates errors; `try_write` does.
//! - Log lines carry keys and sizes only, never stored content.

use crate::repo::kv_repo::{KvRepository, RepoError};
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error from the fallible store entry points.
#[derive(Debug)]
pub enum StoreError {
    Repo(RepoError),
    Encode {
        key: String,
        source: serde_json::Error,
    },
    Decode {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Encode { key, source } => write!(f, "cannot encode value for `{key}`: {source}"),
            Self::Decode { key, source } => write!(f, "stored value for `{key}` is malformed: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Encode { source, .. } | Self::Decode { source, .. } => Some(source),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// How `read` arrived at the value it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Stored JSON decoded successfully.
    Loaded,
    /// Nothing stored under the key; default used.
    Missing,
    /// Stored text was not valid JSON for the type; default used.
    Corrupted,
    /// Repository failed to read; default used.
    Unavailable,
}

impl ReadOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Missing => "missing",
            Self::Corrupted => "corrupted",
            Self::Unavailable => "unavailable",
        }
    }

    pub fn used_default(self) -> bool {
        self != Self::Loaded
    }
}

/// Durable key-value store handing out typed values.
pub struct KvStore<R: KvRepository> {
    repo: R,
}

impl<R: KvRepository> KvStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Reads `key`, falling back to `default` on any failure.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.read_with_outcome(key, default).0
    }

    /// Like [`KvStore::read`], also reporting which path produced the value.
    pub fn read_with_outcome<T: DeserializeOwned>(&self, key: &str, default: T) -> (T, ReadOutcome) {
        match self.repo.get_raw(key) {
            Ok(raw) => decode_or_default(key, raw.as_deref(), default),
            Err(err) => {
                error!(
                    "event=store_read module=store status=fallback reason=unavailable key={key} error={err}"
                );
                (default, ReadOutcome::Unavailable)
            }
        }
    }

    /// Reads and decodes `key`, surfacing every failure.
    ///
    /// Returns `Ok(None)` when the key is absent.
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.repo.get_raw(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.to_string(),
                source,
            })
    }

    /// Persists `value` under `key`; failures are logged and dropped.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_write(key, value) {
            error!("event=store_write module=store status=error key={key} error={err}");
        }
    }

    /// Persists `value` under `key`, surfacing every failure.
    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let text = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.repo.put_raw(key, &text)?;
        debug!(
            "event=store_write module=store status=ok key={key} bytes={}",
            text.len()
        );
        Ok(())
    }

    /// Removes `key`; failures are logged and reported as `false`.
    pub fn remove(&self, key: &str) -> bool {
        match self.repo.remove_raw(key) {
            Ok(existed) => existed,
            Err(err) => {
                error!("event=store_remove module=store status=error key={key} error={err}");
                false
            }
        }
    }
}

/// Decodes raw stored text, substituting `default` when it is absent or
/// malformed.
///
/// This is the single fallback path for persisted state: a corrupted value
/// is discarded and the slice starts over from its default.
pub fn decode_or_default<T: DeserializeOwned>(
    key: &str,
    raw: Option<&str>,
    default: T,
) -> (T, ReadOutcome) {
    let Some(raw) = raw else {
        debug!("event=store_read module=store status=fallback reason=missing key={key}");
        return (default, ReadOutcome::Missing);
    };

    match serde_json::from_str(raw) {
        Ok(value) => (value, ReadOutcome::Loaded),
        Err(err) => {
            warn!(
                "event=store_read module=store status=fallback reason=corrupted key={key} bytes={} line={} column={}",
                raw.len(),
                err.line(),
                err.column()
            );
            (default, ReadOutcome::Corrupted)
        }
    }
}
