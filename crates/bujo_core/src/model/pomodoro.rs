//! Persisted pomodoro settings.

use serde::{Deserialize, Serialize};

/// Pomodoro phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PomodoroMode {
    Work,
    Short,
    Long,
}

/// Phase lengths in minutes. Every value is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroDurations {
    pub work: u32,
    pub short: u32,
    pub long: u32,
}

impl PomodoroDurations {
    pub fn minutes(&self, mode: PomodoroMode) -> u32 {
        match mode {
            PomodoroMode::Work => self.work,
            PomodoroMode::Short => self.short,
            PomodoroMode::Long => self.long,
        }
    }

    pub fn seconds(&self, mode: PomodoroMode) -> u32 {
        self.minutes(mode).saturating_mul(60)
    }

    /// Copy with `mode` set to `minutes`, clamped to at least one minute.
    pub fn with_minutes(mut self, mode: PomodoroMode, minutes: u32) -> Self {
        let minutes = minutes.max(1);
        match mode {
            PomodoroMode::Work => self.work = minutes,
            PomodoroMode::Short => self.short = minutes,
            PomodoroMode::Long => self.long = minutes,
        }
        self
    }
}

impl Default for PomodoroDurations {
    fn default() -> Self {
        Self {
            work: 25,
            short: 5,
            long: 15,
        }
    }
}
