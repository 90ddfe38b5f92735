use serde::{Deserialize, Serialize};

use crate::date::{WeekStart, Weekday};

/// Language of the weekday header row. Everything else user-facing is the
/// caller's formatting responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelLocale {
    #[default]
    English,
    Korean,
}

impl LabelLocale {
    pub fn label(self, weekday: Weekday) -> &'static str {
        match self {
            LabelLocale::English => ["M", "T", "W", "T", "F", "S", "S"][weekday.0 as usize % 7],
            LabelLocale::Korean => {
                ["월", "화", "수", "목", "금", "토", "일"][weekday.0 as usize % 7]
            }
        }
    }
}

/// Header labels ordered by the configured week start.
pub fn weekday_labels(locale: LabelLocale, week_start: WeekStart) -> [&'static str; 7] {
    let mut labels = [""; 7];
    let mut day = week_start.first_weekday();
    for slot in &mut labels {
        *slot = locale.label(day);
        day = day.next();
    }
    labels
}
