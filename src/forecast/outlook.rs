use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use super::icons::weather_symbol;
use crate::models::{ForecastData, WeatherReading};
use crate::outfit::OutfitSuggestion;

/// One line of the weather screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlookRow {
    /// e.g. "Tuesday March, 02, 2021"
    pub date: String,
    /// e.g. "14 C"
    pub temperature: String,
    pub symbol: String,
    pub description: String,
    /// Temperature rounded to whole degrees Celsius
    pub celsius: i32,
}

impl OutlookRow {
    /// Row for `reading`, dated in the location's local time
    #[must_use]
    pub fn from_reading(reading: &WeatherReading, offset: &FixedOffset) -> Self {
        Self {
            date: reading.format_date(offset),
            temperature: reading.format_temperature(),
            symbol: weather_symbol(&reading.icon).to_string(),
            description: reading.format_description(),
            celsius: reading.rounded_temperature(),
        }
    }

    /// What to wear on this day
    #[must_use]
    pub fn outfit(&self) -> OutfitSuggestion {
        OutfitSuggestion::for_celsius(self.celsius)
    }
}

/// Header plus the week of daily rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherOutlook {
    /// Place name shown above the header
    pub location: String,
    pub header: OutlookRow,
    pub days: Vec<OutlookRow>,
}

impl WeatherOutlook {
    #[must_use]
    pub fn build(location: impl Into<String>, forecast: &ForecastData) -> Self {
        let offset = forecast.utc_offset();
        Self {
            location: location.into(),
            header: OutlookRow::from_reading(&forecast.current, &offset),
            days: forecast
                .week()
                .iter()
                .map(|reading| OutlookRow::from_reading(reading, &offset))
                .collect(),
        }
    }

    /// Row for a tapped day, if it exists
    #[must_use]
    pub fn day(&self, index: usize) -> Option<&OutlookRow> {
        self.days.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OUTLOOK_DAYS;
    use crate::outfit::Season;
    use chrono::{Duration, TimeZone, Utc};

    fn reading(day: i64, temperature: f64, icon: &str, description: &str) -> WeatherReading {
        WeatherReading {
            timestamp: Utc.with_ymd_and_hms(2021, 3, 2, 18, 0, 0).unwrap() + Duration::days(day),
            temperature,
            icon: icon.to_string(),
            description: description.to_string(),
        }
    }

    fn forecast(days: i64) -> ForecastData {
        ForecastData::new(
            reading(0, 7.6, "10d", "light rain"),
            (0..days)
                .map(|d| reading(d, 20.0 + d as f64, "01d", "clear sky"))
                .collect(),
        )
    }

    #[test]
    fn test_header_row() {
        let outlook = WeatherOutlook::build("Seattle", &forecast(7));
        assert_eq!(outlook.location, "Seattle");
        assert_eq!(
            outlook.header,
            OutlookRow {
                date: "Tuesday March, 02, 2021".to_string(),
                temperature: "8 C".to_string(),
                symbol: "cloud.sun.rain.fill".to_string(),
                description: "Light Rain".to_string(),
                celsius: 8,
            }
        );
    }

    #[test]
    fn test_days_are_capped_at_a_week() {
        let outlook = WeatherOutlook::build("Seattle", &forecast(8));
        assert_eq!(outlook.days.len(), OUTLOOK_DAYS);
        assert_eq!(outlook.days[1].date, "Wednesday March, 03, 2021");
        assert_eq!(outlook.days[6].temperature, "26 C");
        assert!(outlook.day(7).is_none());
    }

    #[test]
    fn test_days_are_dated_in_local_time() {
        // Noon in Auckland (UTC+13) is 23:00 UTC the previous day
        let noon = WeatherReading {
            timestamp: Utc.with_ymd_and_hms(2021, 3, 1, 23, 0, 0).unwrap(),
            temperature: 21.0,
            icon: "01d".to_string(),
            description: "clear sky".to_string(),
        };
        let forecast =
            ForecastData::new(noon.clone(), vec![noon.clone()]).with_utc_offset(13 * 3600);

        let outlook = WeatherOutlook::build("Auckland", &forecast);
        assert_eq!(outlook.header.date, "Tuesday March, 02, 2021");
        assert_eq!(outlook.days[0].date, "Tuesday March, 02, 2021");

        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            OutlookRow::from_reading(&noon, &utc).date,
            "Monday March, 01, 2021"
        );
    }

    #[test]
    fn test_empty_daily_forecast() {
        let outlook = WeatherOutlook::build("Nowhere", &forecast(0));
        assert!(outlook.days.is_empty());
        assert!(outlook.day(0).is_none());
    }

    #[test]
    fn test_tapped_day_outfit() {
        let outlook = WeatherOutlook::build("Seattle", &forecast(7));
        let day = outlook.day(3).unwrap();
        assert_eq!(day.celsius, 23);
        assert_eq!(day.outfit().season, Season::Summer);
    }
}
