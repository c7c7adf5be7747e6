//! Singleton user profile.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Remote URL or `data:` URL; empty when no photo was chosen.
    pub photo_url: String,
}

/// Fresh journals start as "User"; a stored name (including the Portuguese
/// "Usuário" default of older journals) is kept as saved.
impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            photo_url: String::new(),
        }
    }
}
