//! Journal domain model.
//!
//! # Responsibility
//! - Define the records persisted in each slice and their wire shape.
//! - Keep JSON field names stable (`camelCase`, `type` for kinds).
//!
//! # Invariants
//! - Records are replaced wholesale, never patched in place.
//! - Every record except `MoodEntry` and `UserProfile` carries an `EntityId`.

pub mod bullet;
pub mod collection;
pub mod finance;
pub mod gratitude;
pub mod habit;
pub mod id;
pub mod mood;
pub mod pomodoro;
pub mod profile;
pub mod tab;
pub mod vision;
