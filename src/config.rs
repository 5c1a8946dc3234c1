use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::{MonthIndex, NameTable};
use crate::delivery::{self, Delivery};
use crate::error::{Error, ErrorKind, Result};
use crate::ui::Theme;

const CONFIG_PATH_ENV_VAR: &str = "SAS_CAL_CONFIG_FILE";

pub fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("sas-cal").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".sas-cal.toml"));
    }

    locations
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    pub initial_month: Option<MonthIndex>,
    /// Days with a scheduled delivery.
    pub marked_dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarSettings,
    pub names: NameTable,
    pub theme: Theme,
    pub deliveries: Vec<Delivery>,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;

        toml::from_str(&content).map_err(|e| {
            Error::new(
                ErrorKind::ConfigParse,
                &format!("{}: {}", path.display(), e),
            )
        })
    }

    /// Explicitly marked dates plus every day with a delivery.
    pub fn marked_dates(&self) -> HashSet<NaiveDate> {
        let mut dates = delivery::delivery_dates(&self.deliveries);
        dates.extend(self.calendar.marked_dates.iter().copied());
        dates
    }

    pub fn deliveries_on(&self, date: NaiveDate) -> impl Iterator<Item = &Delivery> {
        delivery::deliveries_on(&self.deliveries, date)
    }
}

/// Loads `path` if given, otherwise the first existing file of
/// [`find_configfile_locations`], otherwise the defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.is_file() {
            return Err(Error::new(
                ErrorKind::ConfigNotFound,
                &path.display().to_string(),
            ));
        }
        log::info!("Loading config from {}", path.display());
        return Config::load(path);
    }

    for location in find_configfile_locations() {
        if location.is_file() {
            log::info!("Loading config from {}", location.display());
            return Config::load(&location);
        }
        log::debug!("No config at {}", location.display());
    }

    log::info!("No config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    #[test]
    fn empty_config_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme.today_char, Some('*'));
        assert_eq!(config.names, NameTable::default());
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml_str(
            r##"
            [calendar]
            initial_month = "2025-03"
            marked_dates = ["2025-03-10", "2025-04-02"]

            [names]
            weekdays = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"]

            [theme]
            event_char = "#"
            show_adjacent_days = true
            "##,
        )
        .unwrap();

        assert_eq!(
            config.calendar.initial_month,
            MonthIndex::new(Month::March, 2025)
        );
        assert!(config
            .marked_dates()
            .contains(&NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()));
        assert_eq!(config.names.weekdays[6], "Sáb");
        assert_eq!(config.names.months[0], "January");
        assert_eq!(config.theme.event_char, Some('#'));
        assert_eq!(config.theme.today_char, Some('*'));
        assert!(config.theme.show_adjacent_days);
    }

    #[test]
    fn deliveries_mark_their_dates() {
        let config = Config::from_toml_str(
            r#"
            [calendar]
            marked_dates = ["2025-03-01"]

            [[deliveries]]
            date = "2025-03-10"
            title = "Delivery #1001"
            subtitle = "Client: John Doe"
            description = "3 boxes of apples"
            state = "delivered"

            [[deliveries]]
            date = "2025-03-10"
            title = "Delivery #1002"
            state = "postponed"
            "#,
        )
        .unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let marked = config.marked_dates();
        assert_eq!(marked.len(), 2);
        assert!(marked.contains(&day));
        assert!(marked.contains(&NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));

        let titles: Vec<_> = config.deliveries_on(day).map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Delivery #1001", "Delivery #1002"]);
        assert_eq!(config.deliveries[1].subtitle, "");
        assert!(Config::from_toml_str("[[deliveries]]\ndate = \"2025-03-10\"\ntitle = \"x\"\nstate = \"lost\"").is_err());
    }

    #[test]
    fn rejects_bad_values() {
        let bad_month = Config::from_toml_str("[calendar]\ninitial_month = \"2025-13\"").unwrap_err();
        assert!(matches!(bad_month.kind, ErrorKind::ConfigParse));

        let short_names = Config::from_toml_str("[names]\nweekdays = [\"a\", \"b\"]");
        assert!(short_names.is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = env::temp_dir().join("sas-cal-does-not-exist.toml");
        let err = load_suitable_config(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigNotFound));
    }

    #[test]
    fn loads_explicit_file() {
        let path = env::temp_dir().join(format!("sas-cal-test-{}.toml", std::process::id()));
        fs::write(&path, "[calendar]\nmarked_dates = [\"2025-03-10\"]\n").unwrap();

        let config = load_suitable_config(Some(path.as_path())).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.calendar.marked_dates.len(), 1);
    }
}
