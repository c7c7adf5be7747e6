//! Habit records and derived check-in views.

use super::id::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A tracked habit and the calendar days it was done.
///
/// `completed_days` is a set: duplicates collapse on load and it serializes
/// as a sorted array of `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: EntityId,
    pub name: String,
    pub completed_days: BTreeSet<NaiveDate>,
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            completed_days: BTreeSet::new(),
        }
    }

    pub fn is_done_on(&self, date: NaiveDate) -> bool {
        self.completed_days.contains(&date)
    }
}

/// Number of habits checked on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCompletion {
    pub date: NaiveDate,
    pub count: usize,
}

/// Total check-ins recorded for one habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitTotal {
    pub id: EntityId,
    pub name: String,
    pub count: usize,
}

/// Starter habits for a fresh journal.
pub fn default_habits() -> Vec<Habit> {
    ["Drink 2L of water", "Meditate 10min", "Read 20 pages"]
        .into_iter()
        .map(Habit::new)
        .collect()
}
