//! Bullet log transitions.

use super::is_blank;
use crate::model::bullet::{BulletEntry, EntryType};
use crate::model::id::EntityId;

/// Prepends a pending entry. Blank `content` leaves the log unchanged.
///
/// `content` is stored as typed, surrounding whitespace included.
pub fn add(entries: &[BulletEntry], kind: EntryType, content: &str, now_millis: i64) -> Vec<BulletEntry> {
    if is_blank(content) {
        return entries.to_vec();
    }
    let mut next = Vec::with_capacity(entries.len() + 1);
    next.push(BulletEntry::new(kind, content, now_millis));
    next.extend_from_slice(entries);
    next
}

/// Advances the status of task `id` one step along its cycle.
///
/// Events, notes and unknown ids are returned unchanged.
pub fn cycle_status(entries: &[BulletEntry], id: &EntityId) -> Vec<BulletEntry> {
    entries
        .iter()
        .map(|entry| {
            if &entry.id != id || entry.kind != EntryType::Task {
                return entry.clone();
            }
            BulletEntry {
                status: entry.status.next(),
                ..entry.clone()
            }
        })
        .collect()
}

pub fn remove(entries: &[BulletEntry], id: &EntityId) -> Vec<BulletEntry> {
    entries.iter().filter(|entry| &entry.id != id).cloned().collect()
}
