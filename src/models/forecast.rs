//! Forecast data returned by the forecast service

use super::WeatherReading;
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Number of daily rows shown in the outlook
pub const OUTLOOK_DAYS: usize = 7;

/// Current conditions plus daily readings for a location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastData {
    /// Conditions right now
    pub current: WeatherReading,
    /// Daily readings, today first
    pub daily: Vec<WeatherReading>,
    /// Location's offset from UTC in seconds (OpenWeather `timezone_offset`)
    #[serde(default)]
    pub utc_offset_seconds: i32,
}

impl ForecastData {
    /// Create new forecast
    #[must_use]
    pub fn new(current: WeatherReading, daily: Vec<WeatherReading>) -> Self {
        Self {
            current,
            daily,
            utc_offset_seconds: 0,
        }
    }

    /// Set the location's offset from UTC
    #[must_use]
    pub fn with_utc_offset(mut self, seconds: i32) -> Self {
        self.utc_offset_seconds = seconds;
        self
    }

    /// The location's offset from UTC; out-of-range offsets fall back to UTC
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix())
    }

    /// The daily readings that make up the week outlook
    #[must_use]
    pub fn week(&self) -> &[WeatherReading] {
        let end = self.daily.len().min(OUTLOOK_DAYS);
        &self.daily[..end]
    }
}
