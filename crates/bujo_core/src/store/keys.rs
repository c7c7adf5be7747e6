//! Stable storage keys, one per persisted slice.

use crate::model::bullet::LogKind;

pub const PROFILE: &str = "mb_profile";
pub const ACTIVE_TAB: &str = "mb_active_nav";
pub const DAILY_LOG: &str = "mb_daily";
pub const WEEKLY_LOG: &str = "mb_weekly";
pub const MONTHLY_LOG: &str = "mb_monthly";
pub const FUTURE_LOG: &str = "mb_future";
pub const HABITS: &str = "mb_habits";
pub const MOODS: &str = "mb_moods";
pub const FINANCES: &str = "mb_finances";
pub const GRATITUDE: &str = "mb_gratitude";
pub const COLLECTIONS: &str = "mb_collections";
pub const VISION: &str = "mb_vision";
pub const POMODORO_DURATIONS: &str = "mb_pomo_durations";
pub const HABIT_VIEW: &str = "mb_habit_view";
pub const HABIT_ORIENTATION: &str = "mb_habit_orient";

/// Key of the given bullet log.
pub fn log_key(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Daily => DAILY_LOG,
        LogKind::Weekly => WEEKLY_LOG,
        LogKind::Monthly => MONTHLY_LOG,
        LogKind::Future => FUTURE_LOG,
    }
}
