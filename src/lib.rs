//! `WeatherWear` - saved map pins, forecast outlooks and outfit suggestions
//!
//! This library provides the core of the WeatherWear app: the persisted set
//! of pins the user dropped on the map, the location chosen for the
//! forecast, reverse geocoding of pins, and the week outlook with clothing
//! suggestions.

pub mod annotations;
pub mod chosen_location;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod logging;
pub mod models;
pub mod outfit;
pub mod pin_store;
pub mod session;
pub mod storage;

// Re-export core types for public API
pub use annotations::{Annotation, AnnotationPlan, plan_annotations};
pub use chosen_location::ChosenLocation;
pub use config::WeatherWearConfig;
pub use error::WeatherWearError;
pub use forecast::{ForecastService, OutlookRow, WeatherOutlook};
pub use geocode::{NominatimGeocoder, Placemark, ReverseGeocoder};
pub use models::{ForecastData, GeoPoint, PinMetadata, SavedPin, WeatherReading};
pub use outfit::{OutfitSuggestion, Season};
pub use pin_store::{PersistWarning, PinChange, PinEvent, PinStore};
pub use session::{MAX_CONCURRENT_LOOKUPS, WeatherWear};
pub use storage::{FjallStore, KeyValueStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherWearError>;
