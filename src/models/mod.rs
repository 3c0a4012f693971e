//! Data models for the `WeatherWear` core
//!
//! This module contains the core domain models organized by concern:
//! - GeoPoint: validated coordinates
//! - Pin: saved map pins and their geocoded metadata
//! - Weather / Forecast: readings from the forecast service

pub mod forecast;
pub mod geo_point;
pub mod pin;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{ForecastData, OUTLOOK_DAYS};
pub use geo_point::{GeoPoint, StoredPoint};
pub use pin::{PLACEHOLDER_TEXT, PinMetadata, SavedPin};
pub use weather::{WeatherReading, capitalize_words};
