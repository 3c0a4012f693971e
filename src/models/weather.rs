//! Weather reading model and display methods

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// One reading from the forecast service, current or daily
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReading {
    /// Timestamp for this reading
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius (day temperature for daily readings)
    pub temperature: f64,
    /// Weather condition icon code from the API, e.g. "10d"
    pub icon: String,
    /// Human-readable description of weather conditions
    pub description: String,
}

impl WeatherReading {
    /// Temperature rounded to whole degrees
    #[must_use]
    pub fn rounded_temperature(&self) -> i32 {
        self.temperature.round() as i32
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{} C", self.rounded_temperature())
    }

    /// Format the timestamp in the location's local time as e.g.
    /// "Tuesday March, 02, 2021"
    #[must_use]
    pub fn format_date(&self, offset: &FixedOffset) -> String {
        self.timestamp
            .with_timezone(offset)
            .format("%A %B, %d, %Y")
            .to_string()
    }

    /// Description with every word capitalized
    #[must_use]
    pub fn format_description(&self) -> String {
        capitalize_words(&self.description)
    }
}

/// Upper-case the first letter of each word and lower-case the rest.
///
/// Any whitespace separates words and is kept as is.
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            out.push(c);
            word_start = true;
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn reading(temperature: f64) -> WeatherReading {
        WeatherReading {
            timestamp: Utc.with_ymd_and_hms(2021, 3, 2, 12, 0, 0).unwrap(),
            temperature,
            icon: "01d".to_string(),
            description: "clear sky".to_string(),
        }
    }

    #[rstest]
    #[case(14.4, "14 C")]
    #[case(14.5, "15 C")]
    #[case(-0.4, "0 C")]
    #[case(-3.6, "-4 C")]
    fn test_format_temperature(#[case] temperature: f64, #[case] expected: &str) {
        assert_eq!(reading(temperature).format_temperature(), expected);
    }

    #[test]
    fn test_format_date() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(reading(10.0).format_date(&utc), "Tuesday March, 02, 2021");
    }

    #[rstest]
    #[case(13 * 3600, "Wednesday March, 03, 2021")]
    #[case(-10 * 3600, "Tuesday March, 02, 2021")]
    #[case(-13 * 3600, "Monday March, 01, 2021")]
    fn test_format_date_in_local_time(#[case] seconds: i32, #[case] expected: &str) {
        let mut late = reading(10.0);
        late.timestamp = Utc.with_ymd_and_hms(2021, 3, 2, 11, 0, 0).unwrap();
        let offset = FixedOffset::east_opt(seconds).unwrap();
        assert_eq!(late.format_date(&offset), expected);
    }

    #[rstest]
    #[case("clear sky", "Clear Sky")]
    #[case("LIGHT rain", "Light Rain")]
    #[case("", "")]
    #[case("overcast  clouds", "Overcast  Clouds")]
    #[case("light\train\nSHOWERS", "Light\tRain\nShowers")]
    #[case(" thunderstorm ", " Thunderstorm ")]
    fn test_capitalize_words(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize_words(input), expected);
    }
}
