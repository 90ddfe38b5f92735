use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::selection::Selection;

/// Notifications produced by model mutations.
/// These flow upward from the model to the embedding presentation layer,
/// which drains them in order after each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEvent {
    /// The page triple shifted; `anchor` is the new current month, ready
    /// for a month/year header refresh.
    PageChanged { anchor: Date },
    /// Echo of the picked date, emitted before the selection is reported.
    DateSelected { date: Date },
    /// The selection moved; both snapshots are included so the caller can
    /// re-style exactly the cells whose status changed.
    SelectionChanged {
        previous: Selection,
        current: Selection,
    },
}

/// Result of one model mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    pub redraw: bool,
    pub events: Vec<CalendarEvent>,
}

impl Update {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw() -> Self {
        Self {
            redraw: true,
            events: Vec::new(),
        }
    }

    pub fn with_event(mut self, event: CalendarEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn merge(&mut self, other: Self) {
        self.redraw |= other.redraw;
        self.events.extend(other.events);
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarEvent, Update};
    use crate::date::Date;

    #[test]
    fn merge_accumulates_events_and_redraw() {
        let anchor = Date::from_parts(2024, 5, 1).expect("valid date");
        let mut update = Update::none();
        update.merge(Update::redraw().with_event(CalendarEvent::PageChanged { anchor }));
        assert!(update.redraw);
        assert_eq!(update.events, vec![CalendarEvent::PageChanged { anchor }]);
    }
}
