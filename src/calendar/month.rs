use chrono::{Datelike, Duration, Local, Month, Months, NaiveDate};
use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// A month of a specific year, without a day.
///
/// Always kept within `MIN_YEAR..=MAX_YEAR`, so padding a month out to full
/// weeks never leaves the range `chrono` can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct MonthIndex {
    first: NaiveDate,
}

impl MonthIndex {
    pub const MIN_YEAR: i32 = -200_000;
    pub const MAX_YEAR: i32 = 200_000;

    pub fn new(month: Month, year: i32) -> Option<Self> {
        if (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            Some(Self::from_total_months(
                year as i64 * 12 + month.number_from_month() as i64 - 1,
            ))
        } else {
            None
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::from_total_months(date.year() as i64 * 12 + date.month0() as i64)
    }

    fn from_total_months(total: i64) -> Self {
        let total = total.clamp(
            Self::MIN_YEAR as i64 * 12,
            Self::MAX_YEAR as i64 * 12 + 11,
        );
        let year = total.div_euclid(12) as i32;
        let month = total.rem_euclid(12) as u32 + 1;

        MonthIndex {
            first: NaiveDate::from_ymd_opt(year, month, 1)
                .expect("clamped year and month always form a valid date"),
        }
    }

    fn total_months(&self) -> i64 {
        self.first.year() as i64 * 12 + self.first.month0() as i64
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> Month {
        MONTHS[self.first.month0() as usize]
    }

    pub fn num_days(&self) -> u32 {
        // Only a December at the very end of chrono's range lacks a successor.
        self.first
            .checked_add_months(Months::new(1))
            .map_or(31, |next| next.signed_duration_since(self.first).num_days() as u32)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first + Duration::days(self.num_days() as i64 - 1)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.first.month0()
    }

    /// Shifts by `delta` months in either direction, saturating at the ends
    /// of the supported range.
    pub fn add_months(&self, delta: i64) -> Self {
        Self::from_total_months(self.total_months().saturating_add(delta))
    }

    pub fn next(&self) -> Self {
        self.add_months(1)
    }

    pub fn prev(&self) -> Self {
        self.add_months(-1)
    }
}

impl Default for MonthIndex {
    fn default() -> Self {
        MonthIndex::containing(Local::now().date_naive())
    }
}

impl From<NaiveDate> for MonthIndex {
    fn from(date: NaiveDate) -> Self {
        MonthIndex::containing(date)
    }
}

impl Add<u32> for MonthIndex {
    type Output = MonthIndex;
    fn add(self, rhs: u32) -> Self::Output {
        self.add_months(rhs as i64)
    }
}

impl Sub<u32> for MonthIndex {
    type Output = MonthIndex;
    fn sub(self, rhs: u32) -> Self::Output {
        self.add_months(-(rhs as i64))
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.first.month())
    }
}

impl FromStr for MonthIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").map_err(|e| {
            Error::new(
                ErrorKind::MonthParse,
                &format!("'{}' is not a YYYY-MM month: {}", s, e),
            )
        })?;

        MonthIndex::new(MONTHS[date.month0() as usize], date.year()).ok_or_else(|| {
            Error::new(
                ErrorKind::MonthParse,
                &format!("year of '{}' is out of range", s),
            )
        })
    }
}

impl TryFrom<String> for MonthIndex {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
