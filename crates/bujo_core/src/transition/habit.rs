//! Habit transitions and derived check-in views.

use super::is_blank;
use crate::config::HABIT_WINDOW_DAYS;
use crate::model::habit::{DayCompletion, Habit, HabitTotal};
use crate::model::id::EntityId;
use chrono::{Days, NaiveDate};

/// Appends a habit with no check-ins. Blank names are rejected.
pub fn add(habits: &[Habit], name: &str) -> Vec<Habit> {
    let mut next = habits.to_vec();
    if !is_blank(name) {
        next.push(Habit::new(name));
    }
    next
}

/// Checks `date` for habit `id` if unchecked, unchecks it otherwise.
///
/// Applying the same toggle twice restores the original value.
pub fn toggle_day(habits: &[Habit], id: &EntityId, date: NaiveDate) -> Vec<Habit> {
    habits
        .iter()
        .map(|habit| {
            if &habit.id != id {
                return habit.clone();
            }
            let mut completed_days = habit.completed_days.clone();
            if !completed_days.remove(&date) {
                completed_days.insert(date);
            }
            Habit {
                completed_days,
                ..habit.clone()
            }
        })
        .collect()
}

pub fn remove(habits: &[Habit], id: &EntityId) -> Vec<Habit> {
    habits.iter().filter(|habit| &habit.id != id).cloned().collect()
}

/// Days of the trailing window ending at `today`, oldest first.
pub fn window_days(today: NaiveDate) -> Vec<NaiveDate> {
    (0..HABIT_WINDOW_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect()
}

/// Number of habits checked on each day of the trailing window.
pub fn weekly_completion(habits: &[Habit], today: NaiveDate) -> Vec<DayCompletion> {
    window_days(today)
        .into_iter()
        .map(|date| DayCompletion {
            date,
            count: habits.iter().filter(|habit| habit.is_done_on(date)).count(),
        })
        .collect()
}

/// All-time check-in count per habit, in habit order.
pub fn totals(habits: &[Habit]) -> Vec<HabitTotal> {
    habits
        .iter()
        .map(|habit| HabitTotal {
            id: habit.id.clone(),
            name: habit.name.clone(),
            count: habit.completed_days.len(),
        })
        .collect()
}
