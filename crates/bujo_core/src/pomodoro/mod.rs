//! Pomodoro countdown.
//!
//! # Responsibility
//! - Model the timer as a synchronous state machine over whole seconds.
//! - Drive one-second ticks from a monotonic clock while running.
//!
//! # Invariants
//! - `time_left` never goes below zero; reaching zero stops the timer and
//!   does not advance to another mode.
//! - Only durations are persisted; countdown state is process-local.

pub mod session;
pub mod timer;

pub use session::PomodoroSession;
pub use timer::{parse_minutes, PomodoroTimer};
