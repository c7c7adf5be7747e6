//! Journal use-case layer.
//!
//! # Responsibility
//! - Own the loaded slices and route user actions through transitions.
//! - Expose the active screen as explicit slice handles.

pub mod journal_service;
pub mod view;
