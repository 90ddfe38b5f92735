use serde::{Deserialize, Serialize};

use crate::date::WeekStart;
use crate::locale::LabelLocale;

/// Model configuration, fixed at construction.
///
/// Defaults to single-date selection with a Sunday week start and English
/// header labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub range_mode: bool,
    pub week_start: WeekStart,
    pub labels: LabelLocale,
}

impl CalendarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range_mode(mut self, range_mode: bool) -> Self {
        self.range_mode = range_mode;
        self
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_labels(mut self, labels: LabelLocale) -> Self {
        self.labels = labels;
        self
    }
}
