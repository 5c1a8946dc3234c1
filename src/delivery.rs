use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryState {
    Delivered,
    ToPrepare,
    Postponed,
}

impl DeliveryState {
    pub fn is_pending(&self) -> bool {
        !matches!(self, DeliveryState::Delivered)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryState::Delivered => "delivered",
            DeliveryState::ToPrepare => "to prepare",
            DeliveryState::Postponed => "postponed",
        }
    }
}

/// One scheduled delivery, as listed in `[[deliveries]]` of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Delivery {
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    pub state: DeliveryState,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.state.as_str(), self.title)?;
        if !self.subtitle.is_empty() {
            write!(f, " ({})", self.subtitle)?;
        }
        Ok(())
    }
}

/// The dates the calendar marks: every day with at least one delivery.
pub fn delivery_dates<'a>(deliveries: impl IntoIterator<Item = &'a Delivery>) -> HashSet<NaiveDate> {
    deliveries.into_iter().map(|delivery| delivery.date).collect()
}

pub fn deliveries_on<'a>(
    deliveries: &'a [Delivery],
    date: NaiveDate,
) -> impl Iterator<Item = &'a Delivery> + 'a {
    deliveries.iter().filter(move |delivery| delivery.date == date)
}

pub fn pending(deliveries: &[Delivery]) -> impl Iterator<Item = &Delivery> {
    deliveries.iter().filter(|delivery| delivery.state.is_pending())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn delivery(day: u32, title: &str, state: DeliveryState) -> Delivery {
        Delivery {
            date: date(2025, 3, day),
            title: title.to_owned(),
            subtitle: String::new(),
            description: String::new(),
            state,
        }
    }

    fn sample() -> Vec<Delivery> {
        vec![
            delivery(10, "Delivery #1001", DeliveryState::Delivered),
            delivery(10, "Delivery #1002", DeliveryState::ToPrepare),
            delivery(14, "Delivery #1003", DeliveryState::Postponed),
        ]
    }

    #[test]
    fn dates_are_deduplicated() {
        let dates = delivery_dates(&sample());
        assert_eq!(dates.len(), 2);
        assert!(dates.contains(&date(2025, 3, 10)));
        assert!(dates.contains(&date(2025, 3, 14)));
    }

    #[test]
    fn filters_by_day_and_state() {
        let deliveries = sample();
        let titles: Vec<_> = deliveries_on(&deliveries, date(2025, 3, 10))
            .map(|d| d.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Delivery #1001", "Delivery #1002"]);
        assert_eq!(deliveries_on(&deliveries, date(2025, 3, 11)).count(), 0);

        let open: Vec<_> = pending(&deliveries).map(|d| d.state).collect();
        assert_eq!(open, vec![DeliveryState::ToPrepare, DeliveryState::Postponed]);
    }

    #[test]
    fn display_includes_state_and_subtitle() {
        let mut item = delivery(10, "Delivery #1002", DeliveryState::ToPrepare);
        assert_eq!(item.to_string(), "[to prepare] Delivery #1002");

        item.subtitle = "Client: Jane Smith".to_owned();
        assert_eq!(item.to_string(), "[to prepare] Delivery #1002 (Client: Jane Smith)");
    }

    #[test]
    fn state_names_in_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            state: DeliveryState,
        }

        let parsed: Wrapper = toml::from_str("state = \"to_prepare\"").unwrap();
        assert_eq!(parsed.state, DeliveryState::ToPrepare);
        assert!(toml::from_str::<Wrapper>("state = \"lost\"").is_err());
    }
}
