use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Role of a day relative to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStatus {
    None,
    Single,
    Start,
    End,
    Middle,
}

/// Start/end pair driven by successive picks.
///
/// Invariant: `end` is only ever set while `start` is set and
/// `start <= end`; in single-select mode `end` stays `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    start: Option<Date>,
    end: Option<Date>,
    range_mode: bool,
}

impl Selection {
    pub fn new(range_mode: bool) -> Self {
        Self {
            start: None,
            end: None,
            range_mode,
        }
    }

    pub fn start(&self) -> Option<Date> {
        self.start
    }

    pub fn end(&self) -> Option<Date> {
        self.end
    }

    pub fn is_range_mode(&self) -> bool {
        self.range_mode
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Advance the machine by one pick.
    ///
    /// Single-select mode replaces the start unconditionally. Range mode
    /// walks empty → start-only → complete; a pick on a complete range
    /// starts over at the picked date, and a pick earlier than a pending
    /// start re-anchors the range there.
    pub fn select(&mut self, date: Date) {
        if !self.range_mode {
            self.start = Some(date);
            self.end = None;
            return;
        }
        let Some(start) = self.start else {
            self.start = Some(date);
            return;
        };
        if self.end.is_some() {
            self.start = Some(date);
            self.end = None;
            return;
        }
        if date >= start {
            self.end = Some(date);
        } else {
            self.start = Some(date);
            self.end = None;
        }
    }

    /// Classify `date` against the current selection. Pure; repeated calls
    /// between picks always agree.
    pub fn status(&self, date: Date) -> DayStatus {
        let Some(start) = self.start else {
            return DayStatus::None;
        };
        let Some(end) = self.end else {
            return if date == start {
                DayStatus::Single
            } else {
                DayStatus::None
            };
        };
        if date == start {
            return if start == end {
                DayStatus::Single
            } else {
                DayStatus::Start
            };
        }
        if date == end {
            return if start == end {
                DayStatus::Single
            } else {
                DayStatus::End
            };
        }
        if start < date && date < end {
            return DayStatus::Middle;
        }
        DayStatus::None
    }
}
