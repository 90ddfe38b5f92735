pub mod config;
pub mod date;
pub mod event;
pub mod grid;
pub mod locale;
pub mod model;
pub mod selection;

pub use config::CalendarConfig;
pub use date::{Date, DateError, WeekStart, Weekday};
pub use event::{CalendarEvent, Update};
pub use grid::MonthPage;
pub use locale::{LabelLocale, weekday_labels};
pub use model::{CalendarModel, PageDirection};
pub use selection::{DayStatus, Selection};
