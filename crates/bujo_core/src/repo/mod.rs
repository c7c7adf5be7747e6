//! Repository layer for raw key-value persistence.
//!
//! # Responsibility
//! - Define the storage contract injected into the journal store.
//! - Isolate SQLite query details from typed store and slice logic.
//!
//! # Invariants
//! - Repositories deal in raw text only; JSON handling lives in `store`.

pub mod kv_repo;
