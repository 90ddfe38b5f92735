use log::debug;

use crate::config::CalendarConfig;
use crate::date::Date;
use crate::event::{CalendarEvent, Update};
use crate::grid::MonthPage;
use crate::locale;
use crate::selection::{DayStatus, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

impl PageDirection {
    fn month_delta(self) -> i32 {
        match self {
            PageDirection::Previous => -1,
            PageDirection::Next => 1,
        }
    }
}

/// Three adjacent month pages plus the selection driving their cell styling.
///
/// The page anchors stay exactly one month apart and only ever move
/// together; the selection outlives page transitions.
#[derive(Debug, Clone)]
pub struct CalendarModel {
    config: CalendarConfig,
    previous: MonthPage,
    current: MonthPage,
    next: MonthPage,
    selection: Selection,
}

impl CalendarModel {
    /// Model anchored at the month containing `reference`, with an empty
    /// selection.
    pub fn new(reference: Date, config: CalendarConfig) -> Self {
        let anchor = reference.first_of_month();
        Self {
            previous: MonthPage::build(anchor.add_months(-1), config.week_start),
            current: MonthPage::build(anchor, config.week_start),
            next: MonthPage::build(anchor.add_months(1), config.week_start),
            selection: Selection::new(config.range_mode),
            config,
        }
    }

    pub fn config(&self) -> CalendarConfig {
        self.config
    }

    pub fn previous_page(&self) -> &MonthPage {
        &self.previous
    }

    pub fn current_page(&self) -> &MonthPage {
        &self.current
    }

    pub fn next_page(&self) -> &MonthPage {
        &self.next
    }

    /// Pages in display order: previous, current, next.
    pub fn pages(&self) -> [&MonthPage; 3] {
        [&self.previous, &self.current, &self.next]
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn current_anchor(&self) -> Date {
        self.current.anchor()
    }

    /// Header labels for the configured locale and week start.
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        locale::weekday_labels(self.config.labels, self.config.week_start)
    }

    /// Event a freshly attached observer should process before any user
    /// interaction, so it can render the initial month header.
    pub fn attach_event(&self) -> CalendarEvent {
        CalendarEvent::PageChanged {
            anchor: self.current_anchor(),
        }
    }

    /// Shift all three pages one month backward or forward. The triple
    /// moves atomically; each page is rebuilt from its shifted anchor.
    pub fn page(&mut self, direction: PageDirection) -> Update {
        let delta = direction.month_delta();
        let week_start = self.config.week_start;
        self.previous = MonthPage::build(self.previous.anchor().add_months(delta), week_start);
        self.current = MonthPage::build(self.current.anchor().add_months(delta), week_start);
        self.next = MonthPage::build(self.next.anchor().add_months(delta), week_start);
        debug!("paged {direction:?}, current month now {}", self.current.anchor());

        Update::redraw().with_event(CalendarEvent::PageChanged {
            anchor: self.current.anchor(),
        })
    }

    /// Feed a picked date through the selection machine.
    pub fn select_date(&mut self, date: Date) -> Update {
        let previous = self.selection;
        self.selection.select(date);
        debug!(
            "selected {date}: start={:?} end={:?}",
            self.selection.start(),
            self.selection.end()
        );

        let mut update = Update::redraw().with_event(CalendarEvent::DateSelected { date });
        if self.selection != previous {
            update = update.with_event(CalendarEvent::SelectionChanged {
                previous,
                current: self.selection,
            });
        }
        update
    }

    pub fn status(&self, date: Date) -> DayStatus {
        self.selection.status(date)
    }
}
