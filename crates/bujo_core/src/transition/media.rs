//! Embedding picked image files as `data:` URLs.
//!
//! Uploaded photos are never sent anywhere; they are stored inline in the
//! profile or vision board as base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encodes file bytes as `data:<mime>;base64,<payload>`.
///
/// An empty `mime` falls back to `application/octet-stream`.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = match mime.trim() {
        "" => "application/octet-stream",
        other => other,
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Whether `url` holds embedded data rather than a remote location.
pub fn is_data_url(url: &str) -> bool {
    url.starts_with("data:")
}
