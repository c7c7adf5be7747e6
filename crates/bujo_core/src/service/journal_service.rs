//! Journal state container.
//!
//! # Responsibility
//! - Own every slice and load each from the store at startup.
//! - Apply pure transitions and write the resulting slice through.
//! - Hold process-local state: active pomodoro countdown, splash timer.
//! - Tear the pomodoro session down when its tab is left.
//!
//! # Invariants
//! - Each slice is loaded exactly once, in `Journal::open`.
//! - Each accepted action writes exactly one slice; rejected input writes
//!   nothing.
//! - Storage failures never surface here; the in-memory slices stay
//!   authoritative.

use super::view::{PomodoroPanel, SliceHandle, View};
use crate::clock::{Clock, SystemClock};
use crate::config::SPLASH_DELAY;
use crate::model::bullet::{BulletEntry, EntryType, LogKind};
use crate::model::collection::Collection;
use crate::model::finance::{LedgerTotals, Transaction, TransactionType};
use crate::model::gratitude::GratitudeEntry;
use crate::model::habit::{default_habits, DayCompletion, Habit, HabitTotal};
use crate::model::id::EntityId;
use crate::model::mood::{Mood, MoodEntry};
use crate::model::pomodoro::{PomodoroDurations, PomodoroMode};
use crate::model::profile::UserProfile;
use crate::model::tab::{ChartOrientation, HabitViewMode, Tab};
use crate::model::vision::{default_vision_board, VisionItem};
use crate::pomodoro::{PomodoroSession, PomodoroTimer};
use crate::repo::kv_repo::KvRepository;
use crate::store::keys;
use crate::store::kv_store::KvStore;
use crate::store::slice::Slice;
use crate::transition::{bullet, collection, finance, gratitude, habit, media, mood, vision};
use chrono::NaiveDate;
use log::{debug, info};
use std::time::Instant;

/// Top-level owner of all journal state.
pub struct Journal<R: KvRepository, C: Clock = SystemClock> {
    store: KvStore<R>,
    clock: C,
    started_at: Instant,
    active_tab: Slice<Tab>,
    profile: Slice<UserProfile>,
    daily: Slice<Vec<BulletEntry>>,
    weekly: Slice<Vec<BulletEntry>>,
    monthly: Slice<Vec<BulletEntry>>,
    future: Slice<Vec<BulletEntry>>,
    habits: Slice<Vec<Habit>>,
    moods: Slice<Vec<MoodEntry>>,
    transactions: Slice<Vec<Transaction>>,
    gratitude: Slice<Vec<GratitudeEntry>>,
    collections: Slice<Vec<Collection>>,
    vision: Slice<Vec<VisionItem>>,
    durations: Slice<PomodoroDurations>,
    habit_view: Slice<HabitViewMode>,
    habit_orientation: Slice<ChartOrientation>,
    pomodoro: PomodoroSession,
}

impl<R: KvRepository> Journal<R, SystemClock> {
    /// Opens a journal over `repo` using the system clock.
    pub fn open(repo: R) -> Self {
        Self::open_with_clock(repo, SystemClock)
    }
}

impl<R: KvRepository, C: Clock> Journal<R, C> {
    /// Loads every slice from `repo`, falling back to defaults.
    pub fn open_with_clock(repo: R, clock: C) -> Self {
        let started_at = Instant::now();
        let store = KvStore::new(repo);

        let durations = Slice::load(&store, keys::POMODORO_DURATIONS, PomodoroDurations::default());
        let pomodoro = PomodoroSession::new(durations.get());

        let journal = Self {
            active_tab: Slice::load(&store, keys::ACTIVE_TAB, Tab::default()),
            profile: Slice::load(&store, keys::PROFILE, UserProfile::default()),
            daily: Slice::load(&store, keys::DAILY_LOG, Vec::new()),
            weekly: Slice::load(&store, keys::WEEKLY_LOG, Vec::new()),
            monthly: Slice::load(&store, keys::MONTHLY_LOG, Vec::new()),
            future: Slice::load(&store, keys::FUTURE_LOG, Vec::new()),
            habits: Slice::load(&store, keys::HABITS, default_habits()),
            moods: Slice::load(&store, keys::MOODS, Vec::new()),
            transactions: Slice::load(&store, keys::FINANCES, Vec::new()),
            gratitude: Slice::load(&store, keys::GRATITUDE, Vec::new()),
            collections: Slice::load(&store, keys::COLLECTIONS, Vec::new()),
            vision: Slice::load(&store, keys::VISION, default_vision_board()),
            habit_view: Slice::load(&store, keys::HABIT_VIEW, HabitViewMode::default()),
            habit_orientation: Slice::load(&store, keys::HABIT_ORIENTATION, ChartOrientation::default()),
            durations,
            pomodoro,
            store,
            clock,
            started_at,
        };

        info!(
            "event=journal_open module=service status=ok duration_ms={} active_tab={:?}",
            started_at.elapsed().as_millis(),
            journal.active_tab.get()
        );
        journal
    }

    pub fn store(&self) -> &KvStore<R> {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Whether the startup splash is still showing at `now`.
    pub fn splash_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) < SPLASH_DELAY
    }

    // Navigation

    pub fn active_tab(&self) -> Tab {
        *self.active_tab.get()
    }

    /// Switches the active tab.
    ///
    /// Leaving [`Tab::Pomodoro`] discards the countdown and its tick
    /// schedule; coming back starts a stopped work timer.
    pub fn navigate(&mut self, tab: Tab) {
        let leaving_pomodoro = self.active_tab() == Tab::Pomodoro && tab != Tab::Pomodoro;
        if self.active_tab.replace(&self.store, tab) {
            debug!("event=navigate module=service status=ok tab={tab:?}");
        }
        if leaving_pomodoro {
            self.pomodoro = PomodoroSession::new(self.durations.get());
            debug!("event=pomodoro_teardown module=service status=ok");
        }
    }

    pub fn back_home(&mut self) {
        self.navigate(Tab::Home);
    }

    /// Resolves the active tab to the slices its screen works on.
    pub fn view(&mut self) -> View<'_, R> {
        let store = &self.store;
        match *self.active_tab.get() {
            Tab::Home => View::Home {
                profile: self.profile.get(),
                vision: SliceHandle::new(store, &mut self.vision),
            },
            Tab::DailyLog => View::Log {
                kind: LogKind::Daily,
                entries: SliceHandle::new(store, &mut self.daily),
            },
            Tab::WeeklyLog => View::Log {
                kind: LogKind::Weekly,
                entries: SliceHandle::new(store, &mut self.weekly),
            },
            Tab::MonthlyLog => View::Log {
                kind: LogKind::Monthly,
                entries: SliceHandle::new(store, &mut self.monthly),
            },
            Tab::FutureLog => View::Log {
                kind: LogKind::Future,
                entries: SliceHandle::new(store, &mut self.future),
            },
            Tab::Collections => View::Collections(SliceHandle::new(store, &mut self.collections)),
            Tab::Habits => View::Habits {
                habits: SliceHandle::new(store, &mut self.habits),
                view_mode: SliceHandle::new(store, &mut self.habit_view),
                orientation: SliceHandle::new(store, &mut self.habit_orientation),
            },
            Tab::Mood => View::Mood(SliceHandle::new(store, &mut self.moods)),
            Tab::Finances => View::Finances(SliceHandle::new(store, &mut self.transactions)),
            Tab::Gratitude => View::Gratitude(SliceHandle::new(store, &mut self.gratitude)),
            Tab::Pomodoro => View::Pomodoro(PomodoroPanel::new(
                store,
                &mut self.durations,
                &mut self.pomodoro,
            )),
            Tab::Settings => View::Settings(SliceHandle::new(store, &mut self.profile)),
        }
    }

    // Bullet logs

    pub fn log(&self, kind: LogKind) -> &[BulletEntry] {
        self.log_slice(kind).get()
    }

    /// Prepends an entry to `kind`'s log; returns whether it was accepted.
    pub fn add_entry(&mut self, kind: LogKind, entry_type: EntryType, content: &str) -> bool {
        let now = self.clock.now_millis();
        let (store, slice) = self.log_parts(kind);
        slice.update(store, |entries| bullet::add(entries, entry_type, content, now))
    }

    pub fn cycle_entry_status(&mut self, kind: LogKind, id: &EntityId) -> bool {
        let (store, slice) = self.log_parts(kind);
        slice.update(store, |entries| bullet::cycle_status(entries, id))
    }

    pub fn remove_entry(&mut self, kind: LogKind, id: &EntityId) -> bool {
        let (store, slice) = self.log_parts(kind);
        slice.update(store, |entries| bullet::remove(entries, id))
    }

    // Habits

    pub fn habits(&self) -> &[Habit] {
        self.habits.get()
    }

    pub fn add_habit(&mut self, name: &str) -> bool {
        self.habits.update(&self.store, |habits| habit::add(habits, name))
    }

    pub fn toggle_habit(&mut self, id: &EntityId, date: NaiveDate) -> bool {
        self.habits
            .update(&self.store, |habits| habit::toggle_day(habits, id, date))
    }

    pub fn toggle_habit_today(&mut self, id: &EntityId) -> bool {
        let today = self.clock.today();
        self.toggle_habit(id, today)
    }

    pub fn remove_habit(&mut self, id: &EntityId) -> bool {
        self.habits.update(&self.store, |habits| habit::remove(habits, id))
    }

    /// Per-day completion counts for the trailing week ending today.
    pub fn habit_week(&self) -> Vec<DayCompletion> {
        habit::weekly_completion(self.habits.get(), self.clock.today())
    }

    pub fn habit_totals(&self) -> Vec<HabitTotal> {
        habit::totals(self.habits.get())
    }

    pub fn habit_view_mode(&self) -> HabitViewMode {
        *self.habit_view.get()
    }

    pub fn set_habit_view_mode(&mut self, mode: HabitViewMode) -> bool {
        self.habit_view.replace(&self.store, mode)
    }

    pub fn habit_orientation(&self) -> ChartOrientation {
        *self.habit_orientation.get()
    }

    pub fn set_habit_orientation(&mut self, orientation: ChartOrientation) -> bool {
        self.habit_orientation.replace(&self.store, orientation)
    }

    // Mood

    pub fn moods(&self) -> &[MoodEntry] {
        self.moods.get()
    }

    pub fn set_mood(&mut self, value: Mood) -> bool {
        let today = self.clock.today();
        self.moods
            .update(&self.store, |moods| mood::set_today(moods, value, today))
    }

    pub fn mood_today(&self) -> Option<Mood> {
        mood::mood_on(self.moods.get(), self.clock.today())
    }

    // Finances

    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.get()
    }

    pub fn add_transaction(&mut self, description: &str, amount_text: &str, kind: TransactionType) -> bool {
        let now = self.clock.now_millis();
        self.transactions.update(&self.store, |transactions| {
            finance::add(transactions, description, amount_text, kind, now)
        })
    }

    pub fn remove_transaction(&mut self, id: &EntityId) -> bool {
        self.transactions
            .update(&self.store, |transactions| finance::remove(transactions, id))
    }

    pub fn balance(&self) -> f64 {
        finance::balance(self.transactions.get())
    }

    pub fn ledger_totals(&self) -> LedgerTotals {
        finance::totals(self.transactions.get())
    }

    // Gratitude

    pub fn gratitude(&self) -> &[GratitudeEntry] {
        self.gratitude.get()
    }

    pub fn add_gratitude(&mut self, content: &str) -> bool {
        let now = self.clock.now_millis();
        self.gratitude
            .update(&self.store, |entries| gratitude::add(entries, content, now))
    }

    pub fn remove_gratitude(&mut self, id: &EntityId) -> bool {
        self.gratitude
            .update(&self.store, |entries| gratitude::remove(entries, id))
    }

    // Collections

    pub fn collections(&self) -> &[Collection] {
        self.collections.get()
    }

    pub fn add_collection(&mut self, name: &str) -> bool {
        self.collections
            .update(&self.store, |collections| collection::add_collection(collections, name))
    }

    pub fn add_collection_item(&mut self, id: &EntityId, item: &str) -> bool {
        self.collections
            .update(&self.store, |collections| collection::add_item(collections, id, item))
    }

    pub fn remove_collection(&mut self, id: &EntityId) -> bool {
        self.collections
            .update(&self.store, |collections| collection::remove_collection(collections, id))
    }

    // Vision board

    pub fn vision_board(&self) -> &[VisionItem] {
        self.vision.get()
    }

    pub fn add_vision_item(&mut self, title: &str, image_url: &str) -> bool {
        self.vision
            .update(&self.store, |items| vision::add(items, title, image_url))
    }

    pub fn remove_vision_item(&mut self, id: &EntityId) -> bool {
        self.vision.update(&self.store, |items| vision::remove(items, id))
    }

    // Profile

    pub fn profile(&self) -> &UserProfile {
        self.profile.get()
    }

    /// Overwrites the profile wholesale.
    pub fn save_profile(&mut self, name: &str, photo_url: &str) -> bool {
        self.profile.replace(
            &self.store,
            UserProfile {
                name: name.to_string(),
                photo_url: photo_url.to_string(),
            },
        )
    }

    /// Replaces the profile photo with an uploaded image embedded inline.
    pub fn set_profile_photo(&mut self, mime: &str, bytes: &[u8]) -> bool {
        let photo_url = media::encode_data_url(mime, bytes);
        debug!(
            "event=profile_photo module=service status=ok bytes={} inline={}",
            bytes.len(),
            media::is_data_url(&photo_url)
        );
        let name = self.profile.get().name.clone();
        self.save_profile(&name, &photo_url)
    }

    // Pomodoro

    pub fn pomodoro(&self) -> &PomodoroTimer {
        self.pomodoro.timer()
    }

    pub fn pomodoro_durations(&self) -> PomodoroDurations {
        *self.durations.get()
    }

    pub fn pomodoro_switch_mode(&mut self, mode: PomodoroMode) {
        self.pomodoro_panel().switch_mode(mode);
    }

    pub fn pomodoro_toggle(&mut self, now: Instant) {
        self.pomodoro_panel().toggle(now);
    }

    pub fn pomodoro_reset(&mut self) {
        self.pomodoro_panel().reset();
    }

    pub fn pomodoro_poll(&mut self, now: Instant) -> u32 {
        self.pomodoro_panel().poll(now)
    }

    pub fn pomodoro_toggle_settings(&mut self) {
        self.pomodoro_panel().toggle_settings();
    }

    /// Sets `mode`'s length and persists the durations.
    pub fn pomodoro_update_duration(&mut self, mode: PomodoroMode, minutes: u32) -> bool {
        self.pomodoro_panel().update_duration(mode, minutes)
    }

    /// Like [`Journal::pomodoro_update_duration`] for raw form text.
    pub fn pomodoro_update_duration_text(&mut self, mode: PomodoroMode, text: &str) -> bool {
        self.pomodoro_panel().update_duration_text(mode, text)
    }

    fn pomodoro_panel(&mut self) -> PomodoroPanel<'_, R> {
        PomodoroPanel::new(&self.store, &mut self.durations, &mut self.pomodoro)
    }

    fn log_slice(&self, kind: LogKind) -> &Slice<Vec<BulletEntry>> {
        match kind {
            LogKind::Daily => &self.daily,
            LogKind::Weekly => &self.weekly,
            LogKind::Monthly => &self.monthly,
            LogKind::Future => &self.future,
        }
    }

    fn log_parts(&mut self, kind: LogKind) -> (&KvStore<R>, &mut Slice<Vec<BulletEntry>>) {
        let slice = match kind {
            LogKind::Daily => &mut self.daily,
            LogKind::Weekly => &mut self.weekly,
            LogKind::Monthly => &mut self.monthly,
            LogKind::Future => &mut self.future,
        };
        (&self.store, slice)
    }
}
