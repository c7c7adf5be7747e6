//! Daily mood records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Neutral,
    Bad,
    Awful,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Self::Great,
        Self::Good,
        Self::Neutral,
        Self::Bad,
        Self::Awful,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Bad => "Bad",
            Self::Awful => "Awful",
        }
    }
}

/// Mood recorded for one calendar day. `date` is the slice key: at most one
/// entry per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
}
