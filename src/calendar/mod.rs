//! Month arithmetic and the month grid model the calendar widget renders.

mod grid;
pub mod month;
mod names;

pub use grid::{generate_calendar_month, CalendarDay, CalendarMonth, DAYS_PER_WEEK};
pub use month::MonthIndex;
pub use names::{month_label, NameTable};
