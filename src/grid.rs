use log::trace;
use serde::{Deserialize, Serialize};

use crate::date::{Date, WeekStart};

/// One display month: a first-of-month anchor plus every cell date in order.
///
/// The day list opens with enough trailing days of the prior month to place
/// day 1 in its weekday column. The trailing edge is not padded: the list
/// ends at the last day of the anchor month and the final row may be
/// partial, with `rows` accounting for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPage {
    anchor: Date,
    days: Vec<Date>,
}

impl MonthPage {
    /// Build the page for the month containing `date`.
    pub fn build(date: Date, week_start: WeekStart) -> Self {
        let anchor = date.first_of_month();
        let last = date.last_of_month();
        let offset = week_start.offset_of(anchor.weekday()) as i64;

        let mut days = Vec::with_capacity(offset as usize + last.day as usize);
        let mut day = anchor.add_days(-offset);
        while day <= last {
            days.push(day);
            day = day.add_days(1);
        }

        trace!("built page {anchor}: {} cells", days.len());
        MonthPage { anchor, days }
    }

    pub fn anchor(&self) -> Date {
        self.anchor
    }

    pub fn days(&self) -> &[Date] {
        &self.days
    }

    /// Number of leading cells borrowed from the prior month.
    pub fn leading_filler(&self) -> usize {
        (self.anchor.to_unix_days() - self.days[0].to_unix_days()) as usize
    }

    /// Week rows needed to lay the page out, final partial row included.
    pub fn rows(&self) -> usize {
        self.days.len().div_ceil(7)
    }

    /// Whether `date` belongs to the anchor month, as opposed to being a
    /// filler cell.
    pub fn in_anchor_month(&self, date: Date) -> bool {
        date.year == self.anchor.year && date.month == self.anchor.month
    }
}
