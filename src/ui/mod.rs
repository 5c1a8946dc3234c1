mod month_pane;
mod theme;

pub use month_pane::{DayCell, MonthPane};
pub use theme::Theme;
