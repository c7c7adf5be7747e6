//! Active-screen dispatch.
//!
//! A [`View`] is what the presentation layer receives for the active tab:
//! the slices that screen reads plus the means to update them. Screens get
//! nothing else, so each one's dependencies are spelled out in its variant.

use crate::model::bullet::{BulletEntry, LogKind};
use crate::model::collection::Collection;
use crate::model::finance::Transaction;
use crate::model::gratitude::GratitudeEntry;
use crate::model::habit::Habit;
use crate::model::mood::MoodEntry;
use crate::model::pomodoro::{PomodoroDurations, PomodoroMode};
use crate::model::profile::UserProfile;
use crate::model::tab::{ChartOrientation, HabitViewMode};
use crate::model::vision::VisionItem;
use crate::pomodoro::{parse_minutes, PomodoroSession, PomodoroTimer};
use crate::repo::kv_repo::KvRepository;
use crate::store::kv_store::KvStore;
use crate::store::slice::Slice;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;

/// Read access plus whole-value update for one slice.
pub struct SliceHandle<'a, R: KvRepository, T> {
    store: &'a KvStore<R>,
    slice: &'a mut Slice<T>,
}

impl<'a, R, T> SliceHandle<'a, R, T>
where
    R: KvRepository,
    T: Serialize + DeserializeOwned + PartialEq,
{
    pub(crate) fn new(store: &'a KvStore<R>, slice: &'a mut Slice<T>) -> Self {
        Self { store, slice }
    }

    pub fn get(&self) -> &T {
        self.slice.get()
    }

    /// Applies a transition and persists the result; see [`Slice::update`].
    pub fn update(&mut self, next: impl FnOnce(&T) -> T) -> bool {
        self.slice.update(self.store, next)
    }

    pub fn replace(&mut self, value: T) -> bool {
        self.slice.replace(self.store, value)
    }
}

/// Screen selected by the active tab, with the state it may touch.
pub enum View<'a, R: KvRepository> {
    Home {
        profile: &'a UserProfile,
        vision: SliceHandle<'a, R, Vec<VisionItem>>,
    },
    Log {
        kind: LogKind,
        entries: SliceHandle<'a, R, Vec<BulletEntry>>,
    },
    Collections(SliceHandle<'a, R, Vec<Collection>>),
    Habits {
        habits: SliceHandle<'a, R, Vec<Habit>>,
        view_mode: SliceHandle<'a, R, HabitViewMode>,
        orientation: SliceHandle<'a, R, ChartOrientation>,
    },
    Mood(SliceHandle<'a, R, Vec<MoodEntry>>),
    Finances(SliceHandle<'a, R, Vec<Transaction>>),
    Gratitude(SliceHandle<'a, R, Vec<GratitudeEntry>>),
    Pomodoro(PomodoroPanel<'a, R>),
    Settings(SliceHandle<'a, R, UserProfile>),
}

/// Pomodoro screen state: the running session plus read-only durations.
///
/// Durations change only through [`PomodoroPanel::update_duration`], which
/// clamps to at least one minute and resets the timer when the edited mode
/// is active.
pub struct PomodoroPanel<'a, R: KvRepository> {
    store: &'a KvStore<R>,
    durations: &'a mut Slice<PomodoroDurations>,
    session: &'a mut PomodoroSession,
}

impl<'a, R: KvRepository> PomodoroPanel<'a, R> {
    pub(crate) fn new(
        store: &'a KvStore<R>,
        durations: &'a mut Slice<PomodoroDurations>,
        session: &'a mut PomodoroSession,
    ) -> Self {
        Self {
            store,
            durations,
            session,
        }
    }

    pub fn durations(&self) -> &PomodoroDurations {
        self.durations.get()
    }

    pub fn timer(&self) -> &PomodoroTimer {
        self.session.timer()
    }

    pub fn is_armed(&self) -> bool {
        self.session.is_armed()
    }

    pub fn switch_mode(&mut self, mode: PomodoroMode) {
        self.session.switch_mode(mode, self.durations.get());
    }

    pub fn toggle(&mut self, now: Instant) {
        self.session.toggle(now);
    }

    pub fn reset(&mut self) {
        self.session.reset(self.durations.get());
    }

    /// Applies due ticks; see [`PomodoroSession::poll`].
    pub fn poll(&mut self, now: Instant) -> u32 {
        self.session.poll(now)
    }

    pub fn toggle_settings(&mut self) {
        self.session.toggle_settings();
    }

    /// Sets `mode`'s length and persists the durations.
    pub fn update_duration(&mut self, mode: PomodoroMode, minutes: u32) -> bool {
        let updated = self
            .session
            .update_duration(self.durations.get(), mode, minutes);
        self.durations.replace(self.store, updated)
    }

    /// Like [`PomodoroPanel::update_duration`] for raw form text.
    pub fn update_duration_text(&mut self, mode: PomodoroMode, text: &str) -> bool {
        self.update_duration(mode, parse_minutes(text))
    }
}
