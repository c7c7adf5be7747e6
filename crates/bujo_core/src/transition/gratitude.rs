//! Gratitude journal transitions.

use super::is_blank;
use crate::model::gratitude::GratitudeEntry;
use crate::model::id::EntityId;

/// Prepends an entry; blank content is rejected.
pub fn add(entries: &[GratitudeEntry], content: &str, now_millis: i64) -> Vec<GratitudeEntry> {
    if is_blank(content) {
        return entries.to_vec();
    }
    let mut next = Vec::with_capacity(entries.len() + 1);
    next.push(GratitudeEntry {
        id: EntityId::generate(),
        content: content.to_string(),
        date: now_millis,
    });
    next.extend_from_slice(entries);
    next
}

pub fn remove(entries: &[GratitudeEntry], id: &EntityId) -> Vec<GratitudeEntry> {
    entries.iter().filter(|entry| &entry.id != id).cloned().collect()
}
