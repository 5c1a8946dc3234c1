use chrono::NaiveDate;
use std::collections::HashSet;

use super::Control;
use crate::calendar::{generate_calendar_month, CalendarDay, CalendarMonth, MonthIndex};
use crate::cmds::{Cmd, CmdResult};
use crate::error::{Error, ErrorKind, Result};

/// State behind the calendar widget: the displayed month, the marked dates
/// and the grid generated from them.
///
/// The grid is regenerated right after every change to its inputs and
/// replaced as a whole.
pub struct CalendarControl<'a> {
    current: MonthIndex,
    marked_dates: HashSet<NaiveDate>,
    today: NaiveDate,
    grid: CalendarMonth,
    on_day_click: Box<dyn FnMut(NaiveDate) + 'a>,
    on_month_change: Box<dyn FnMut(MonthIndex) + 'a>,
}

impl<'a> CalendarControl<'a> {
    pub fn new(initial: MonthIndex, today: NaiveDate) -> Self {
        let marked_dates = HashSet::new();
        let grid = generate_calendar_month(initial, &marked_dates, today);

        CalendarControl {
            current: initial,
            marked_dates,
            today,
            grid,
            on_day_click: Box::new(|_: NaiveDate| {}),
            on_month_change: Box::new(|_: MonthIndex| {}),
        }
    }

    pub fn marked_dates(mut self, marked_dates: HashSet<NaiveDate>) -> Self {
        self.set_marked_dates(marked_dates);
        self
    }

    pub fn day_click_callback(mut self, callback: impl FnMut(NaiveDate) + 'a) -> Self {
        self.on_day_click = Box::new(callback);
        self
    }

    pub fn month_change_callback(mut self, callback: impl FnMut(MonthIndex) + 'a) -> Self {
        self.on_month_change = Box::new(callback);
        self
    }

    pub fn month(&self) -> MonthIndex {
        self.current
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn calendar_month(&self) -> &CalendarMonth {
        &self.grid
    }

    pub fn is_marked(&self, date: &NaiveDate) -> bool {
        self.marked_dates.contains(date)
    }

    fn regenerate(&mut self) {
        log::debug!(
            "Regenerating grid for {} ({} marked dates)",
            self.current,
            self.marked_dates.len()
        );
        self.grid = generate_calendar_month(self.current, &self.marked_dates, self.today);
    }

    pub fn set_marked_dates(&mut self, marked_dates: HashSet<NaiveDate>) {
        if marked_dates != self.marked_dates {
            self.marked_dates = marked_dates;
            self.regenerate();
        }
    }

    /// Moves "today" forward, e.g. when the app stays open past midnight.
    pub fn set_today(&mut self, today: NaiveDate) {
        if today != self.today {
            self.today = today;
            self.regenerate();
        }
    }

    /// Displays `month`, notifying the month-change callback unless it is
    /// already shown.
    pub fn show_month(&mut self, month: MonthIndex) {
        if month == self.current {
            return;
        }

        self.current = month;
        self.regenerate();
        (self.on_month_change)(self.current);
    }

    pub fn show_today(&mut self) {
        self.show_month(MonthIndex::containing(self.today));
    }

    pub fn on_previous_month(&mut self) {
        self.show_month(self.current.prev());
    }

    pub fn on_next_month(&mut self) {
        self.show_month(self.current.next());
    }

    /// Forwards the date of `day` to the click callback. Padding days of the
    /// neighbouring months are inert; returns whether the click went through.
    pub fn on_day_click(&mut self, day: &CalendarDay) -> bool {
        if !day.is_current_month {
            return false;
        }

        (self.on_day_click)(day.date);
        true
    }

    pub fn pick_day(&mut self, day_of_month: u32) -> Result<NaiveDate> {
        let day = *self
            .grid
            .current_month_day(day_of_month)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::UnknownDay,
                    &format!("{} has no day {}", self.current, day_of_month),
                )
            })?;

        self.on_day_click(&day);
        Ok(day.date)
    }
}

impl Control for CalendarControl<'_> {
    fn send_cmd(&mut self, cmd: &Cmd) -> CmdResult {
        match cmd {
            Cmd::NextMonth(n) => {
                self.show_month(self.current.add_months(*n as i64));
                Ok(Cmd::Noop)
            }
            Cmd::PrevMonth(n) => {
                self.show_month(self.current.add_months(-(*n as i64)));
                Ok(Cmd::Noop)
            }
            Cmd::Today => {
                self.show_today();
                Ok(Cmd::Noop)
            }
            Cmd::Pick(day) => {
                self.pick_day(*day)?;
                Ok(Cmd::Noop)
            }
            _ => Ok(*cmd),
        }
    }
}
