use bujo_core::db::open_db;
use bujo_core::store::keys;
use bujo_core::{
    ChartOrientation, EntryStatus, EntryType, FixedClock, HabitViewMode, Journal, KvRepository,
    LogKind, MemoryKvRepository, Mood, PomodoroMode, SqliteKvRepository, Tab, TransactionType,
    View,
};
use chrono::NaiveDate;
use std::time::{Duration, Instant};

const NOW: i64 = 1_760_778_000_000;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::new(today(), NOW)
}

#[test]
fn fresh_journal_loads_defaults_and_flushes_them() {
    let repo = MemoryKvRepository::new();
    let journal = Journal::open_with_clock(&repo, clock());

    assert_eq!(journal.active_tab(), Tab::Home);
    assert_eq!(journal.profile().name, "User");
    assert_eq!(journal.habits().len(), 3);
    assert_eq!(journal.vision_board().len(), 3);
    assert!(journal.log(LogKind::Daily).is_empty());
    assert_eq!(journal.pomodoro().time_left(), 25 * 60);
    assert_eq!(journal.habit_view_mode(), HabitViewMode::Matrix);
    assert_eq!(journal.habit_orientation(), ChartOrientation::Vertical);

    let stored = repo.keys().unwrap();
    for key in [
        keys::PROFILE,
        keys::ACTIVE_TAB,
        keys::DAILY_LOG,
        keys::WEEKLY_LOG,
        keys::MONTHLY_LOG,
        keys::FUTURE_LOG,
        keys::HABITS,
        keys::MOODS,
        keys::FINANCES,
        keys::GRATITUDE,
        keys::COLLECTIONS,
        keys::VISION,
        keys::POMODORO_DURATIONS,
        keys::HABIT_VIEW,
        keys::HABIT_ORIENTATION,
    ] {
        assert!(stored.iter().any(|k| k == key), "key {key} was not flushed");
    }
}

#[test]
fn corrupted_slice_falls_back_without_touching_other_slices() {
    let repo = MemoryKvRepository::with_entries([
        (keys::HABITS, "{oops"),
        (keys::PROFILE, r#"{"name":"Ana","photoUrl":""}"#),
        (keys::POMODORO_DURATIONS, r#"{"work":50,"short":10,"long":20}"#),
    ]);
    let journal = Journal::open_with_clock(&repo, clock());

    assert_eq!(journal.habits().len(), 3);
    assert_eq!(journal.profile().name, "Ana");
    assert_eq!(journal.pomodoro_durations().work, 50);
    assert_eq!(journal.pomodoro().time_left(), 50 * 60);
}

#[test]
fn every_accepted_action_writes_the_whole_slice() {
    let repo = MemoryKvRepository::new();
    let mut journal = Journal::open_with_clock(&repo, clock());

    assert!(journal.add_entry(LogKind::Weekly, EntryType::Task, "plan sprint"));
    let stored = repo.get_raw(keys::WEEKLY_LOG).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(json[0]["content"], "plan sprint");
    assert_eq!(json[0]["createdAt"], NOW);
    assert_eq!(repo.get_raw(keys::DAILY_LOG).unwrap().as_deref(), Some("[]"));
}

#[test]
fn rejected_input_writes_nothing() {
    let repo = MemoryKvRepository::new();
    let mut journal = Journal::open_with_clock(&repo, clock());
    repo.remove_raw(keys::DAILY_LOG).unwrap();
    repo.remove_raw(keys::FINANCES).unwrap();

    assert!(!journal.add_entry(LogKind::Daily, EntryType::Note, "   "));
    assert!(!journal.add_transaction("Lunch", "twelve", TransactionType::Expense));

    assert!(repo.get_raw(keys::DAILY_LOG).unwrap().is_none());
    assert!(repo.get_raw(keys::FINANCES).unwrap().is_none());
}

#[test]
fn bullet_log_actions_use_the_selected_log() {
    let mut journal = Journal::open_with_clock(MemoryKvRepository::new(), clock());

    journal.add_entry(LogKind::Future, EntryType::Task, "renew passport");
    journal.add_entry(LogKind::Future, EntryType::Event, "wedding");
    let task_id = journal.log(LogKind::Future)[1].id.clone();

    assert!(journal.cycle_entry_status(LogKind::Future, &task_id));
    assert_eq!(journal.log(LogKind::Future)[1].status, EntryStatus::Completed);
    assert!(!journal.cycle_entry_status(LogKind::Daily, &task_id));

    assert!(journal.remove_entry(LogKind::Future, &task_id));
    assert_eq!(journal.log(LogKind::Future).len(), 1);
    assert_eq!(journal.log(LogKind::Future)[0].content, "wedding");
}

#[test]
fn habit_and_mood_use_the_clock_for_today() {
    let clock = clock();
    let mut journal = Journal::open_with_clock(MemoryKvRepository::new(), &clock);
    let id = journal.habits()[0].id.clone();

    assert!(journal.toggle_habit_today(&id));
    assert!(journal.habits()[0].is_done_on(today()));
    assert_eq!(journal.habit_week()[6].count, 1);
    assert_eq!(journal.habit_totals()[0].count, 1);

    assert!(journal.set_mood(Mood::Good));
    assert!(journal.set_mood(Mood::Great));
    assert_eq!(journal.moods().len(), 1);
    assert_eq!(journal.mood_today(), Some(Mood::Great));

    let tomorrow = today().succ_opt().unwrap();
    clock.set_today(tomorrow);
    assert_eq!(journal.mood_today(), None);
    assert!(journal.set_mood(Mood::Bad));
    assert_eq!(journal.moods().len(), 2);
    assert_eq!(journal.habit_week()[5].count, 1);
}

#[test]
fn finance_gratitude_collections_vision_and_profile_round_trip_through_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut journal = Journal::open_with_clock(SqliteKvRepository::new(&conn), clock());
        journal.add_transaction("Salary", "100", TransactionType::Income);
        journal.add_transaction("Books", "30", TransactionType::Expense);
        journal.add_gratitude("family dinner");
        journal.add_collection("Reading list");
        let list = journal.collections()[0].id.clone();
        journal.add_collection_item(&list, "Middlemarch");
        journal.add_vision_item("Cabin", "https://example.com/cabin.jpg");
        journal.save_profile("Rui", "data:image/png;base64,AA==");
        journal.set_habit_view_mode(HabitViewMode::Chart);
        journal.set_habit_orientation(ChartOrientation::Horizontal);
        journal.navigate(Tab::Finances);
    }

    let conn = open_db(&path).unwrap();
    let journal = Journal::open_with_clock(SqliteKvRepository::new(&conn), clock());
    assert_eq!(journal.balance(), 70.0);
    assert_eq!(journal.ledger_totals().expense, 30.0);
    assert_eq!(journal.gratitude()[0].content, "family dinner");
    assert_eq!(journal.collections()[0].items, vec!["Middlemarch"]);
    assert_eq!(journal.vision_board().len(), 4);
    assert_eq!(journal.vision_board()[0].title, "Cabin");
    assert_eq!(journal.profile().name, "Rui");
    assert_eq!(journal.habit_view_mode(), HabitViewMode::Chart);
    assert_eq!(journal.habit_orientation(), ChartOrientation::Horizontal);
    assert_eq!(journal.active_tab(), Tab::Finances);
}

#[test]
fn uploaded_profile_photo_is_stored_inline() {
    let repo = MemoryKvRepository::new();
    let mut journal = Journal::open_with_clock(&repo, clock());

    assert!(journal.set_profile_photo("image/png", &[0, 1, 2]));
    assert_eq!(journal.profile().name, "User");
    assert_eq!(journal.profile().photo_url, "data:image/png;base64,AAEC");
    assert!(repo
        .get_raw(keys::PROFILE)
        .unwrap()
        .unwrap()
        .contains("data:image/png;base64,AAEC"));
}

#[test]
fn removals_drop_records() {
    let mut journal = Journal::open_with_clock(MemoryKvRepository::new(), clock());

    let habit = journal.habits()[0].id.clone();
    assert!(journal.remove_habit(&habit));
    assert_eq!(journal.habits().len(), 2);

    journal.add_transaction("Tea", "2", TransactionType::Expense);
    let tea = journal.transactions()[0].id.clone();
    assert!(journal.remove_transaction(&tea));
    assert_eq!(journal.balance(), 0.0);

    journal.add_gratitude("rain");
    let rain = journal.gratitude()[0].id.clone();
    assert!(journal.remove_gratitude(&rain));

    journal.add_collection("Ideas");
    let ideas = journal.collections()[0].id.clone();
    assert!(journal.remove_collection(&ideas));

    let card = journal.vision_board()[0].id.clone();
    assert!(journal.remove_vision_item(&card));
    assert_eq!(journal.vision_board().len(), 2);
}

#[test]
fn storage_failure_keeps_session_state() {
    let repo = MemoryKvRepository::new();
    let mut journal = Journal::open_with_clock(&repo, clock());
    repo.set_reject_writes(true);

    assert!(journal.add_gratitude("still here"));
    assert_eq!(journal.gratitude().len(), 1);
    assert_eq!(repo.get_raw(keys::GRATITUDE).unwrap().as_deref(), Some("[]"));
}

#[test]
fn view_follows_active_tab_and_updates_its_slice() {
    let repo = MemoryKvRepository::new();
    let mut journal = Journal::open_with_clock(&repo, clock());

    match journal.view() {
        View::Home { profile, vision } => {
            assert_eq!(profile.name, "User");
            assert_eq!(vision.get().len(), 3);
        }
        _ => panic!("expected home view"),
    }

    journal.navigate(Tab::MonthlyLog);
    match journal.view() {
        View::Log { kind, mut entries } => {
            assert_eq!(kind, LogKind::Monthly);
            assert!(entries.update(|log| {
                bujo_core::transition::bullet::add(log, EntryType::Note, "budget review", NOW)
            }));
        }
        _ => panic!("expected monthly log view"),
    }
    assert_eq!(journal.log(LogKind::Monthly)[0].content, "budget review");
    assert!(repo
        .get_raw(keys::MONTHLY_LOG)
        .unwrap()
        .unwrap()
        .contains("budget review"));

    journal.navigate(Tab::Pomodoro);
    match journal.view() {
        View::Pomodoro(mut panel) => {
            assert_eq!(panel.durations().short, 5);
            panel.switch_mode(PomodoroMode::Short);
        }
        _ => panic!("expected pomodoro view"),
    }
    assert_eq!(journal.pomodoro().time_left(), 300);

    journal.back_home();
    assert_eq!(journal.active_tab(), Tab::Home);
    assert_eq!(repo.get_raw(keys::ACTIVE_TAB).unwrap().as_deref(), Some("\"home\""));
}

#[test]
fn pomodoro_durations_persist_and_reset_active_mode() {
    let repo = MemoryKvRepository::new();
    let mut journal = Journal::open_with_clock(&repo, clock());
    let start = Instant::now();

    journal.pomodoro_toggle(start);
    assert_eq!(journal.pomodoro_poll(start + Duration::from_secs(2)), 2);

    journal.pomodoro_update_duration(PomodoroMode::Work, 10);
    assert_eq!(journal.pomodoro().time_left(), 600);
    assert!(!journal.pomodoro().is_running());
    assert_eq!(
        repo.get_raw(keys::POMODORO_DURATIONS).unwrap().as_deref(),
        Some(r#"{"work":10,"short":5,"long":15}"#)
    );

    journal.pomodoro_switch_mode(PomodoroMode::Short);
    journal.pomodoro_toggle(start);
    journal.pomodoro_update_duration_text(PomodoroMode::Long, "abc");
    assert_eq!(journal.pomodoro_durations().long, 1);
    assert_eq!(journal.pomodoro().time_left(), 300);
    assert!(journal.pomodoro().is_running());

    journal.pomodoro_toggle_settings();
    assert!(journal.pomodoro().settings_open());
    journal.pomodoro_reset();
    assert!(!journal.pomodoro().is_running());
}

#[test]
fn splash_hides_after_fixed_delay() {
    let journal = Journal::open_with_clock(MemoryKvRepository::new(), clock());
    let later = Instant::now() + Duration::from_secs(3);

    assert!(!journal.splash_visible(later));
}

#[test]
fn pomodoro_panel_clamps_duration_edits_and_persists_them() {
    let repo = MemoryKvRepository::new();
    let mut journal = Journal::open_with_clock(&repo, clock());
    journal.navigate(Tab::Pomodoro);
    let start = Instant::now();

    match journal.view() {
        View::Pomodoro(mut panel) => {
            panel.toggle(start);
            assert!(panel.is_armed());
            assert!(panel.update_duration(PomodoroMode::Work, 0));
            assert_eq!(panel.durations().work, 1);
            assert_eq!(panel.timer().time_left(), 60);
            assert!(!panel.timer().is_running());
            assert!(!panel.is_armed());
        }
        _ => panic!("expected pomodoro view"),
    }
    assert_eq!(
        repo.get_raw(keys::POMODORO_DURATIONS).unwrap().as_deref(),
        Some(r#"{"work":1,"short":5,"long":15}"#)
    );
}

#[test]
fn leaving_pomodoro_tab_stops_the_countdown() {
    let mut journal = Journal::open_with_clock(MemoryKvRepository::new(), clock());
    let start = Instant::now();

    journal.navigate(Tab::Pomodoro);
    journal.pomodoro_switch_mode(PomodoroMode::Short);
    journal.pomodoro_toggle(start);
    assert_eq!(journal.pomodoro_poll(start + Duration::from_secs(1)), 1);

    journal.navigate(Tab::Home);
    assert_eq!(journal.pomodoro_poll(start + Duration::from_secs(6)), 0);

    journal.navigate(Tab::Pomodoro);
    assert_eq!(journal.pomodoro().mode(), PomodoroMode::Work);
    assert!(!journal.pomodoro().is_running());
    assert_eq!(journal.pomodoro().time_left(), 25 * 60);
}

#[test]
fn staying_on_pomodoro_tab_keeps_the_countdown() {
    let mut journal = Journal::open_with_clock(MemoryKvRepository::new(), clock());
    let start = Instant::now();

    journal.navigate(Tab::Pomodoro);
    journal.pomodoro_toggle(start);
    journal.navigate(Tab::Pomodoro);

    assert_eq!(journal.pomodoro_poll(start + Duration::from_secs(3)), 3);
    assert!(journal.pomodoro().is_running());
}

#[test]
fn unreadable_storage_at_open_leaves_stored_slices_alone() {
    let stored = r#"{"name":"Ana","photoUrl":"x"}"#;
    let repo = MemoryKvRepository::with_entries([(keys::PROFILE, stored)]);
    repo.set_reject_reads(true);

    let journal = Journal::open_with_clock(&repo, clock());
    assert_eq!(journal.profile().name, "User");

    repo.set_reject_reads(false);
    assert_eq!(repo.get_raw(keys::PROFILE).unwrap().as_deref(), Some(stored));
    assert!(repo.get_raw(keys::HABITS).unwrap().is_none());
}

#[test]
fn active_tab_saved_by_portuguese_build_is_restored() {
    let repo = MemoryKvRepository::with_entries([
        (keys::ACTIVE_TAB, r#""Finanças""#),
        (keys::PROFILE, r#"{"name":"Usuário","photoUrl":""}"#),
    ]);
    let journal = Journal::open_with_clock(&repo, clock());

    assert_eq!(journal.active_tab(), Tab::Finances);
    assert_eq!(journal.profile().name, "Usuário");
    assert_eq!(
        repo.get_raw(keys::ACTIVE_TAB).unwrap().as_deref(),
        Some(r#""finances""#)
    );
}
