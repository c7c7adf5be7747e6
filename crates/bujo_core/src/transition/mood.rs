//! Mood transitions.

use crate::model::mood::{Mood, MoodEntry};
use chrono::NaiveDate;

/// Records `mood` for `today`, replacing any entry already dated today.
///
/// The replacement is delete-then-append, so today's entry always ends up
/// last and no date appears twice.
pub fn set_today(moods: &[MoodEntry], mood: Mood, today: NaiveDate) -> Vec<MoodEntry> {
    let mut next: Vec<MoodEntry> = moods
        .iter()
        .filter(|entry| entry.date != today)
        .copied()
        .collect();
    next.push(MoodEntry { date: today, mood });
    next
}

/// Mood recorded for `date`, if any.
pub fn mood_on(moods: &[MoodEntry], date: NaiveDate) -> Option<Mood> {
    moods
        .iter()
        .find(|entry| entry.date == date)
        .map(|entry| entry.mood)
}
