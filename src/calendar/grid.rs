use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;

use super::MonthIndex;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the lead/trail days borrowed from the adjacent months.
    pub is_current_month: bool,
    pub is_today: bool,
    pub has_event: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub month: MonthIndex,
    /// Sunday-to-Saturday rows of exactly seven days each.
    pub weeks: Vec<Vec<CalendarDay>>,
}

impl CalendarMonth {
    pub fn num_weeks(&self) -> usize {
        self.weeks.len()
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    pub fn day(&self, date: &NaiveDate) -> Option<&CalendarDay> {
        self.days().find(|day| &day.date == date)
    }

    pub fn current_month_day(&self, day_of_month: u32) -> Option<&CalendarDay> {
        self.days()
            .find(|day| day.is_current_month && day.date.day() == day_of_month)
    }
}

fn days_since_sunday(date: &NaiveDate) -> i64 {
    date.weekday().num_days_from_sunday() as i64
}

/// Lays out `month` as full Sunday-first weeks.
///
/// `today` is passed in rather than read from the clock, so the result only
/// depends on the arguments.
pub fn generate_calendar_month(
    month: MonthIndex,
    marked_dates: &HashSet<NaiveDate>,
    today: NaiveDate,
) -> CalendarMonth {
    let first = month.first_day();
    let last = month.last_day();

    let start = first - Duration::days(days_since_sunday(&first));
    let end = last
        + Duration::days(Weekday::Sat.num_days_from_sunday() as i64 - days_since_sunday(&last));

    let days: Vec<CalendarDay> = (0..=(end - start).num_days())
        .map(|offset| start + Duration::days(offset))
        .map(|date| CalendarDay {
            date,
            is_current_month: month.contains(&date),
            is_today: date == today,
            has_event: marked_dates.contains(&date),
        })
        .collect();

    let weeks = days
        .chunks(DAYS_PER_WEEK)
        .map(<[CalendarDay]>::to_vec)
        .collect();

    CalendarMonth { month, weeks }
}
