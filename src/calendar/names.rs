use chrono::{Month, Weekday};
use once_cell::sync::Lazy;
use serde::Deserialize;

use super::MonthIndex;

static ENGLISH: Lazy<NameTable> = Lazy::new(|| NameTable {
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(String::from),
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]
    .map(String::from),
});

fn english_weekdays() -> [String; 7] {
    ENGLISH.weekdays.clone()
}

fn english_months() -> [String; 12] {
    ENGLISH.months.clone()
}

/// Display names for weekdays (Sunday first) and months (January first).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameTable {
    #[serde(default = "english_weekdays")]
    pub weekdays: [String; 7],
    #[serde(default = "english_months")]
    pub months: [String; 12],
}

impl NameTable {
    pub fn english() -> &'static NameTable {
        &ENGLISH
    }

    pub fn weekday(&self, weekday: Weekday) -> &str {
        &self.weekdays[weekday.num_days_from_sunday() as usize]
    }

    pub fn month(&self, month: Month) -> &str {
        &self.months[month.number_from_month() as usize - 1]
    }

    pub fn weekday_header(&self) -> impl Iterator<Item = &str> {
        self.weekdays.iter().map(String::as_str)
    }
}

impl Default for NameTable {
    fn default() -> Self {
        ENGLISH.clone()
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Month name with a capital first letter followed by the year padded to four
/// digits, e.g. "March 2025". Years before 1 keep their sign in front of the
/// padded digits ("March -0005").
pub fn month_label(month: MonthIndex, names: &NameTable) -> String {
    let year = month.year();
    format!(
        "{} {}{:04}",
        capitalize(names.month(month.month())),
        if year < 0 { "-" } else { "" },
        year.unsigned_abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_label() {
        let march = MonthIndex::new(Month::March, 2025).unwrap();
        assert_eq!(month_label(march, NameTable::english()), "March 2025");

        let early = MonthIndex::new(Month::July, 987).unwrap();
        assert_eq!(month_label(early, &NameTable::default()), "July 0987");
    }

    #[test]
    fn label_of_years_before_the_common_era() {
        let march = MonthIndex::new(Month::March, -5).unwrap();
        assert_eq!(month_label(march, NameTable::english()), "March -0005");

        let year_zero = MonthIndex::new(Month::January, 0).unwrap();
        assert_eq!(month_label(year_zero, NameTable::english()), "January 0000");

        let far = MonthIndex::new(Month::May, -12345).unwrap();
        assert_eq!(month_label(far, NameTable::english()), "May -12345");
    }

    #[test]
    fn injected_names_are_capitalized() {
        let mut names = NameTable::default();
        names.months[2] = "março".to_owned();
        names.weekdays[0] = "dom".to_owned();

        let march = MonthIndex::new(Month::March, 2025).unwrap();
        assert_eq!(month_label(march, &names), "Março 2025");
        assert_eq!(names.weekday(Weekday::Sun), "dom");
        assert_eq!(names.weekday(Weekday::Sat), "Sat");
    }

    #[test]
    fn header_starts_on_sunday() {
        let header: Vec<_> = NameTable::english().weekday_header().collect();
        assert_eq!(header, vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    }

    #[test]
    fn partial_table_from_toml() {
        let names: NameTable = toml::from_str(
            r#"months = ["jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez"]"#,
        )
        .unwrap();
        assert_eq!(names.month(Month::August), "ago");
        assert_eq!(names.weekday(Weekday::Wed), "Wed");
    }
}
