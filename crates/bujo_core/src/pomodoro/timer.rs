//! Pomodoro state machine.

use crate::model::pomodoro::{PomodoroDurations, PomodoroMode};

/// Countdown state for the active pomodoro mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroTimer {
    mode: PomodoroMode,
    time_left: u32,
    running: bool,
    settings_open: bool,
}

impl PomodoroTimer {
    /// Stopped work timer at its full configured length.
    pub fn new(durations: &PomodoroDurations) -> Self {
        Self {
            mode: PomodoroMode::Work,
            time_left: durations.seconds(PomodoroMode::Work),
            running: false,
            settings_open: false,
        }
    }

    pub fn mode(&self) -> PomodoroMode {
        self.mode
    }

    /// Remaining seconds.
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    /// Selects `mode`, stops, and refills the countdown for it.
    pub fn switch_mode(&mut self, mode: PomodoroMode, durations: &PomodoroDurations) {
        self.mode = mode;
        self.running = false;
        self.time_left = durations.seconds(mode);
    }

    /// Starts or pauses. An exhausted countdown cannot be started.
    pub fn toggle(&mut self) {
        self.running = !self.running && self.time_left > 0;
    }

    /// Stops and refills the countdown for the current mode.
    pub fn reset(&mut self, durations: &PomodoroDurations) {
        self.running = false;
        self.time_left = durations.seconds(self.mode);
    }

    /// Applies one elapsed second.
    ///
    /// Returns `true` when this tick finished the countdown.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.running = false;
            return true;
        }
        false
    }

    /// Returns `durations` with `mode` set to `minutes` (at least 1).
    ///
    /// Editing the active mode stops the timer and refills it with the new
    /// length; editing another mode leaves the countdown alone.
    pub fn update_duration(
        &mut self,
        durations: &PomodoroDurations,
        mode: PomodoroMode,
        minutes: u32,
    ) -> PomodoroDurations {
        let updated = durations.with_minutes(mode, minutes);
        if mode == self.mode {
            self.running = false;
            self.time_left = updated.seconds(mode);
        }
        updated
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.time_left / 60, self.time_left % 60)
    }
}

/// Reads a minutes field the way the settings form does: the leading
/// integer of the text, with anything unparsable or below 1 becoming 1.
pub fn parse_minutes(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative {
        return 1;
    }
    digits[..end].parse::<u32>().map_or(1, |minutes| minutes.max(1))
}
