//! Bullet log entries.
//!
//! # Invariants
//! - `status` only changes for `EntryType::Task`; events and notes keep the
//!   status they were created with.
//! - `created_at` is Unix epoch milliseconds.

use super::id::EntityId;
use serde::{Deserialize, Serialize};

/// Kind of a bullet log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Task,
    Event,
    Note,
}

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    Completed,
    Migrated,
    Cancelled,
}

impl EntryStatus {
    /// Next state on the fixed cycle
    /// `pending -> completed -> migrated -> cancelled -> pending`.
    pub fn next(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Migrated,
            Self::Migrated => Self::Cancelled,
            Self::Cancelled => Self::Pending,
        }
    }
}

/// One line in a daily, weekly, monthly or future log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletEntry {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub content: String,
    pub status: EntryStatus,
    pub created_at: i64,
}

impl BulletEntry {
    /// Creates a pending entry with a generated id.
    pub fn new(kind: EntryType, content: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: EntityId::generate(),
            kind,
            content: content.into(),
            status: EntryStatus::Pending,
            created_at,
        }
    }

    /// Rapid-logging signifier drawn in front of the entry.
    ///
    /// Notes and events use fixed symbols; tasks reflect their status.
    pub fn signifier(&self) -> char {
        match (self.kind, self.status) {
            (EntryType::Note, _) => '–',
            (EntryType::Event, _) => '○',
            (EntryType::Task, EntryStatus::Pending) => '•',
            (EntryType::Task, EntryStatus::Completed) => '×',
            (EntryType::Task, EntryStatus::Migrated) => '>',
            (EntryType::Task, EntryStatus::Cancelled) => '~',
        }
    }
}

/// The four bullet logs, each persisted under its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    Daily,
    Weekly,
    Monthly,
    Future,
}

impl LogKind {
    pub const ALL: [LogKind; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Future];

    pub fn title(self) -> &'static str {
        match self {
            Self::Daily => "Daily Log",
            Self::Weekly => "Weekly Log",
            Self::Monthly => "Monthly Log",
            Self::Future => "Future Log",
        }
    }
}
