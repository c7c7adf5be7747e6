//! Gratitude journal entries.

use super::id::EntityId;
use serde::{Deserialize, Serialize};

/// One gratitude note; `date` is Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratitudeEntry {
    pub id: EntityId,
    pub content: String,
    pub date: i64,
}
