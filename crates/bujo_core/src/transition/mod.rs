//! Pure state transitions for every journal slice.
//!
//! # Responsibility
//! - Compute the next slice value from the current value and a user action.
//!
//! # Invariants
//! - Functions never mutate their input and never touch storage or clocks;
//!   time arrives as arguments.
//! - Rejected input (blank text, unknown id, unparsable amount) yields a
//!   value equal to the input, so callers persist nothing.

pub mod bullet;
pub mod collection;
pub mod finance;
pub mod gratitude;
pub mod habit;
pub mod media;
pub mod mood;
pub mod vision;

/// Whether user text is empty once surrounding whitespace is ignored.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
