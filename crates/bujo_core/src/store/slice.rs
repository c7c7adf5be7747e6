//! One persisted piece of journal state bound to one key.

use super::kv_store::{KvStore, ReadOutcome};
use crate::repo::kv_repo::KvRepository;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// In-memory mirror of a value stored under a fixed key.
///
/// The mirror is the source of truth for the session; every change is
/// written through as the complete new value.
#[derive(Debug, Clone)]
pub struct Slice<T> {
    key: &'static str,
    value: T,
}

impl<T> Slice<T>
where
    T: Serialize + DeserializeOwned + PartialEq,
{
    /// Loads `key` (or `default`) and writes the result back once, so a
    /// missing or corrupted entry is replaced by what the session now holds.
    ///
    /// A failed read skips the write-back: the stored value may still be
    /// intact and only unreadable right now.
    pub fn load<R: KvRepository>(store: &KvStore<R>, key: &'static str, default: T) -> Self {
        let (value, outcome) = store.read_with_outcome(key, default);
        if outcome != ReadOutcome::Unavailable {
            store.write(key, &value);
        }
        Self { key, value }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the whole value and persists it.
    ///
    /// Returns `false` without writing when `value` equals the current one.
    pub fn replace<R: KvRepository>(&mut self, store: &KvStore<R>, value: T) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        store.write(self.key, &self.value);
        true
    }

    /// Computes the next value from the current one and persists it.
    pub fn update<R: KvRepository>(&mut self, store: &KvStore<R>, next: impl FnOnce(&T) -> T) -> bool {
        let value = next(&self.value);
        self.replace(store, value)
    }
}
