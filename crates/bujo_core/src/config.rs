//! Static configuration values and path helpers.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the journal database inside the data directory.
pub const DEFAULT_DB_FILE_NAME: &str = "bujo.sqlite3";

/// How long the startup splash stays on screen.
pub const SPLASH_DELAY: Duration = Duration::from_millis(2500);

/// Interval between pomodoro countdown ticks.
pub const POMODORO_TICK: Duration = Duration::from_secs(1);

/// Trailing window, in days and including today, of the habit chart.
pub const HABIT_WINDOW_DAYS: u64 = 7;

/// Resolves the journal database path inside `data_dir`.
pub fn resolve_db_path(data_dir: impl AsRef<Path>) -> PathBuf {
    data_dir.as_ref().join(DEFAULT_DB_FILE_NAME)
}
