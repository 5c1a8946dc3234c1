use chrono::Datelike;
use std::fmt::{self, Display, Write};
use termion::style;

use super::Theme;
use crate::calendar::{month_label, CalendarDay, CalendarMonth, NameTable};

pub struct DayCell<'a> {
    day: &'a CalendarDay,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    pub const CELL_WIDTH: usize = 4;

    pub fn new(day: &'a CalendarDay, theme: &'a Theme) -> Self {
        DayCell { day, theme }
    }

    fn is_blank(&self) -> bool {
        !self.day.is_current_month && !self.theme.show_adjacent_days
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            return write!(f, "{:width$}", "", width = Self::CELL_WIDTH);
        }

        let arg_today = if self.day.is_today {
            self.theme.today_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_event = if self.day.has_event {
            self.theme.event_char.unwrap_or(' ')
        } else {
            ' '
        };

        if self.day.is_today && self.theme.highlight {
            write!(
                f,
                "{}{}{}{:>2}{}",
                style::Bold,
                arg_today,
                arg_event,
                self.day.date.day(),
                style::Reset
            )
        } else {
            write!(f, "{}{}{:>2}", arg_today, arg_event, self.day.date.day())
        }
    }
}

/// Text rendering of one generated month: a label line, the weekday header
/// and one line per week.
pub struct MonthPane<'a> {
    calendar_month: &'a CalendarMonth,
    names: &'a NameTable,
    theme: &'a Theme,
}

impl<'a> MonthPane<'a> {
    pub fn new(calendar_month: &'a CalendarMonth, names: &'a NameTable, theme: &'a Theme) -> Self {
        MonthPane {
            calendar_month,
            names,
            theme,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.calendar_month.num_weeks() + 2);

        lines.push(month_label(self.calendar_month.month, self.names));

        let mut header = String::new();
        for name in self.names.weekday_header() {
            // Weekday names are cut to fit the cell.
            let _ = write!(header, "{:>width$.3}", name, width = DayCell::CELL_WIDTH);
        }
        lines.push(header.trim_end().to_owned());

        for week in &self.calendar_month.weeks {
            let mut row = String::new();
            for day in week {
                let _ = write!(row, "{}", DayCell::new(day, self.theme));
            }
            lines.push(row.trim_end().to_owned());
        }

        lines
    }
}

impl Display for MonthPane<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
