//! Wall-clock access for timestamps and calendar days.
//!
//! Transitions take time as plain arguments; the journal pulls them from an
//! injected `Clock` so tests can pin "now" and "today".

use chrono::{Local, NaiveDate, Utc};
use std::cell::Cell;

/// Source of the current time.
pub trait Clock {
    /// Current time as Unix epoch milliseconds.
    fn now_millis(&self) -> i64;

    /// Current calendar day in the user's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now_millis: Cell<i64>,
    today: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate, now_millis: i64) -> Self {
        Self {
            now_millis: Cell::new(now_millis),
            today: Cell::new(today),
        }
    }

    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }

    pub fn advance_millis(&self, millis: i64) {
        self.now_millis.set(self.now_millis.get() + millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.now_millis.get()
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
