//! Vision board transitions.

use super::is_blank;
use crate::model::id::EntityId;
use crate::model::vision::VisionItem;

/// Prepends a board item. Both `title` and `image_url` are required.
pub fn add(items: &[VisionItem], title: &str, image_url: &str) -> Vec<VisionItem> {
    if is_blank(title) || is_blank(image_url) {
        return items.to_vec();
    }
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(VisionItem::new(title, image_url));
    next.extend_from_slice(items);
    next
}

pub fn remove(items: &[VisionItem], id: &EntityId) -> Vec<VisionItem> {
    items.iter().filter(|item| &item.id != id).cloned().collect()
}
