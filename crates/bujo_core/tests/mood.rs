use bujo_core::transition::mood;
use bujo_core::{Mood, MoodEntry};
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[test]
fn set_today_appends_when_no_entry_exists() {
    let moods = vec![MoodEntry {
        date: day(17),
        mood: Mood::Bad,
    }];

    let next = mood::set_today(&moods, Mood::Good, day(18));
    assert_eq!(next.len(), 2);
    assert_eq!(next[1], MoodEntry { date: day(18), mood: Mood::Good });
}

#[test]
fn set_today_replaces_existing_entry_for_today() {
    let moods = vec![
        MoodEntry { date: day(18), mood: Mood::Awful },
        MoodEntry { date: day(16), mood: Mood::Neutral },
    ];

    let next = mood::set_today(&moods, Mood::Great, day(18));

    assert_eq!(next.iter().filter(|entry| entry.date == day(18)).count(), 1);
    assert_eq!(next.len(), 2);
    assert_eq!(next[0].date, day(16));
    assert_eq!(mood::mood_on(&next, day(18)), Some(Mood::Great));
}

#[test]
fn repeated_calls_keep_one_entry_per_day() {
    let mut moods = Vec::new();
    for value in Mood::ALL {
        moods = mood::set_today(&moods, value, day(18));
        assert_eq!(moods.iter().filter(|entry| entry.date == day(18)).count(), 1);
    }
    assert_eq!(mood::mood_on(&moods, day(18)), Some(Mood::Awful));
    assert_eq!(mood::mood_on(&moods, day(1)), None);
}

#[test]
fn mood_entry_wire_shape_uses_iso_date() {
    let entry = MoodEntry { date: day(18), mood: Mood::Neutral };
    assert_eq!(
        serde_json::to_value(entry).unwrap(),
        serde_json::json!({ "date": "2026-10-18", "mood": "neutral" })
    );
}
