//! Navigation and view preferences.

use serde::{Deserialize, Serialize};

/// Screen selected in the navigation; exactly one is active at a time.
///
/// Written as snake_case names. Journals saved by the earlier Portuguese
/// build stored display titles (`"Início"`, `"Registro Diário"`, ...); those
/// are accepted as aliases so the active tab survives the upgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    #[serde(alias = "Início")]
    Home,
    #[serde(alias = "Registro Diário")]
    DailyLog,
    #[serde(alias = "Registro Semanal")]
    WeeklyLog,
    #[serde(alias = "Registro Mensal")]
    MonthlyLog,
    #[serde(alias = "Registro Futuro")]
    FutureLog,
    #[serde(alias = "Coleções")]
    Collections,
    #[serde(alias = "Hábitos")]
    Habits,
    #[serde(alias = "Humor")]
    Mood,
    #[serde(alias = "Finanças")]
    Finances,
    #[serde(alias = "Gratidão")]
    Gratitude,
    #[serde(alias = "Pomodoro")]
    Pomodoro,
    #[serde(alias = "Configurações")]
    Settings,
}

impl Tab {
    /// Feature cards listed on the home dashboard, in display order.
    pub const DASHBOARD: [Tab; 10] = [
        Self::DailyLog,
        Self::WeeklyLog,
        Self::MonthlyLog,
        Self::FutureLog,
        Self::Collections,
        Self::Habits,
        Self::Mood,
        Self::Finances,
        Self::Gratitude,
        Self::Pomodoro,
    ];
}

/// Habit screen layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitViewMode {
    Chart,
    #[default]
    Matrix,
}

/// Bar direction of the habit chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartOrientation {
    #[default]
    Vertical,
    Horizontal,
}
