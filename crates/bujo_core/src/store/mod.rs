//! Durable key-value store and state slices.
//!
//! # Responsibility
//! - Typed JSON read/write over an injected `KvRepository`.
//! - Bind each slice of journal state to one stable key.
//!
//! # Invariants
//! - Reads never fail: absent or corrupted values fall back to the default.
//! - Writes never fail: persistence errors are logged and the in-memory
//!   value stays authoritative for the session.
//! - Every slice update persists the complete new value.

pub mod keys;
pub mod kv_store;
pub mod slice;
