//! Themed lists ("collections").

use super::id::EntityId;
use serde::{Deserialize, Serialize};

/// Named list of free-text items kept in insertion order. Items may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: EntityId,
    pub name: String,
    pub items: Vec<String>,
}
