//! Core state layer for the bullet journal.
//! Persistence, slice transitions and the pomodoro timer live here; screens
//! only read slices and call into this crate.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod pomodoro;
pub mod repo;
pub mod service;
pub mod store;
pub mod transition;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::bullet::{BulletEntry, EntryStatus, EntryType, LogKind};
pub use model::collection::Collection;
pub use model::finance::{LedgerTotals, Transaction, TransactionType};
pub use model::gratitude::GratitudeEntry;
pub use model::habit::{DayCompletion, Habit, HabitTotal};
pub use model::id::EntityId;
pub use model::mood::{Mood, MoodEntry};
pub use model::pomodoro::{PomodoroDurations, PomodoroMode};
pub use model::profile::UserProfile;
pub use model::tab::{ChartOrientation, HabitViewMode, Tab};
pub use model::vision::VisionItem;
pub use pomodoro::{PomodoroSession, PomodoroTimer};
pub use repo::kv_repo::{KvRepository, MemoryKvRepository, RepoError, RepoResult, SqliteKvRepository};
pub use service::journal_service::Journal;
pub use service::view::{PomodoroPanel, SliceHandle, View};
pub use store::kv_store::{decode_or_default, KvStore, ReadOutcome, StoreError, StoreResult};
pub use store::slice::Slice;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
