//! Vision board items.

use super::id::EntityId;
use serde::{Deserialize, Serialize};

/// Picture on the vision board. `image_url` is a remote URL or a
/// `data:` URL holding an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionItem {
    pub id: EntityId,
    pub image_url: String,
    pub title: String,
}

impl VisionItem {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate(),
            image_url: image_url.into(),
            title: title.into(),
        }
    }
}

/// Starter board for a fresh journal.
pub fn default_vision_board() -> Vec<VisionItem> {
    [
        ("Dream Trip", "https://picsum.photos/seed/travel/400/300"),
        ("New Home", "https://picsum.photos/seed/home/400/300"),
        ("Focus and Health", "https://picsum.photos/seed/health/400/300"),
    ]
    .into_iter()
    .map(|(title, url)| VisionItem::new(title, url))
    .collect()
}
