//! Tick scheduling for the pomodoro timer.
//!
//! The host event loop calls [`PomodoroSession::poll`] with the current
//! monotonic instant; due one-second ticks are applied in order. The tick
//! schedule exists only while the timer runs: every transition that stops
//! the timer cancels it, and dropping the session drops it.

use super::timer::PomodoroTimer;
use crate::config::POMODORO_TICK;
use crate::model::pomodoro::{PomodoroDurations, PomodoroMode};
use log::info;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct PomodoroSession {
    timer: PomodoroTimer,
    next_tick: Option<Instant>,
}

impl PomodoroSession {
    pub fn new(durations: &PomodoroDurations) -> Self {
        Self {
            timer: PomodoroTimer::new(durations),
            next_tick: None,
        }
    }

    pub fn timer(&self) -> &PomodoroTimer {
        &self.timer
    }

    /// Whether a tick is scheduled.
    pub fn is_armed(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn toggle(&mut self, now: Instant) {
        self.timer.toggle();
        self.rearm(now);
    }

    pub fn switch_mode(&mut self, mode: PomodoroMode, durations: &PomodoroDurations) {
        self.timer.switch_mode(mode, durations);
        self.next_tick = None;
    }

    pub fn reset(&mut self, durations: &PomodoroDurations) {
        self.timer.reset(durations);
        self.next_tick = None;
    }

    pub fn toggle_settings(&mut self) {
        self.timer.toggle_settings();
    }

    /// See [`PomodoroTimer::update_duration`].
    pub fn update_duration(
        &mut self,
        durations: &PomodoroDurations,
        mode: PomodoroMode,
        minutes: u32,
    ) -> PomodoroDurations {
        let updated = self.timer.update_duration(durations, mode, minutes);
        if !self.timer.is_running() {
            self.next_tick = None;
        }
        updated
    }

    /// Applies every tick due at `now` and returns how many were applied.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut applied = 0;
        while let Some(due) = self.next_tick {
            if due > now {
                break;
            }
            applied += 1;
            if self.timer.tick() {
                info!(
                    "event=pomodoro_finished module=pomodoro status=ok mode={:?}",
                    self.timer.mode()
                );
            }
            self.next_tick = self.timer.is_running().then(|| due + POMODORO_TICK);
        }
        applied
    }

    fn rearm(&mut self, now: Instant) {
        self.next_tick = self.timer.is_running().then(|| now + POMODORO_TICK);
    }
}
