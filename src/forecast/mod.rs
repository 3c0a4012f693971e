//! Forecast outlook
//!
//! The forecast itself comes from an external service behind
//! `ForecastService`; this module turns it into the rows the weather screen
//! shows: a header for right now and one row per day of the week.

pub mod icons;
pub mod outlook;

pub use icons::weather_symbol;
pub use outlook::{OutlookRow, WeatherOutlook};

use async_trait::async_trait;

use crate::Result;
use crate::models::{ForecastData, GeoPoint};

/// Source of multi-day forecasts
#[async_trait]
pub trait ForecastService: Send + Sync {
    /// Current conditions and daily readings for `point`.
    ///
    /// Failures are reported as `WeatherWearError::Forecast`.
    async fn get_forecast(&self, point: GeoPoint) -> Result<ForecastData>;
}
