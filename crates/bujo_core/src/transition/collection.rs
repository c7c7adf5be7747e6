//! Collection transitions.

use super::is_blank;
use crate::model::collection::Collection;
use crate::model::id::EntityId;

/// Prepends an empty collection; blank names are rejected.
pub fn add_collection(collections: &[Collection], name: &str) -> Vec<Collection> {
    if is_blank(name) {
        return collections.to_vec();
    }
    let mut next = Vec::with_capacity(collections.len() + 1);
    next.push(Collection {
        id: EntityId::generate(),
        name: name.to_string(),
        items: Vec::new(),
    });
    next.extend_from_slice(collections);
    next
}

/// Appends `item` to collection `id`.
///
/// Blank items and unknown ids leave the collections unchanged. Repeated
/// items are kept.
pub fn add_item(collections: &[Collection], id: &EntityId, item: &str) -> Vec<Collection> {
    if is_blank(item) {
        return collections.to_vec();
    }
    collections
        .iter()
        .map(|collection| {
            if &collection.id != id {
                return collection.clone();
            }
            let mut items = collection.items.clone();
            items.push(item.to_string());
            Collection {
                items,
                ..collection.clone()
            }
        })
        .collect()
}

pub fn remove_collection(collections: &[Collection], id: &EntityId) -> Vec<Collection> {
    collections.iter().filter(|c| &c.id != id).cloned().collect()
}
