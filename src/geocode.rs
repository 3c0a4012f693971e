//! Reverse geocoding: turn a dropped pin into a place name and locality.
//!
//! `NominatimGeocoder` talks to Nominatim (OpenStreetMap); anything else can
//! plug in through `ReverseGeocoder`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::config::GeocodingConfig;
use crate::models::{GeoPoint, PLACEHOLDER_TEXT, PinMetadata};
use crate::{Result, WeatherWearError};

/// What a reverse geocoder knows about a point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placemark {
    pub name: Option<String>,
    pub locality: Option<String>,
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<Placemark>;
}

/// Look up display metadata for `point`.
///
/// A failed lookup yields `None` so the pin keeps rendering with
/// placeholders; a partial placemark fills the gaps with placeholders.
pub async fn resolve_metadata<G>(geocoder: &G, point: GeoPoint) -> Option<PinMetadata>
where
    G: ReverseGeocoder + ?Sized,
{
    match geocoder.reverse_geocode(point).await {
        Ok(placemark) => Some(PinMetadata::new(
            non_blank(placemark.name).unwrap_or_else(|| PLACEHOLDER_TEXT.to_string()),
            non_blank(placemark.locality).unwrap_or_else(|| PLACEHOLDER_TEXT.to_string()),
        )),
        Err(e) => {
            debug!("Reverse geocoding {} failed: {}", point, e);
            None
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    name: Option<String>,
    address: Option<NominatimAddress>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    road: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
}

impl From<NominatimResponse> for Placemark {
    fn from(body: NominatimResponse) -> Self {
        let (road, locality) = match body.address {
            Some(addr) => (
                addr.road,
                addr.city
                    .or(addr.town)
                    .or(addr.village)
                    .or(addr.municipality),
            ),
            None => (None, None),
        };
        Placemark {
            name: non_blank(body.name).or(road),
            locality,
        }
    }
}

/// Reverse geocoder backed by the Nominatim `/reverse` endpoint.
///
/// Requests are spaced at least `min_request_gap` apart, across clones too.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    min_request_gap: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| WeatherWearError::config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            min_request_gap: Duration::from_millis(config.min_request_gap_ms),
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Wait until the gap since the previous request has passed
    async fn wait_for_request_slot(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_request_gap {
                let wait = self.min_request_gap.saturating_sub(elapsed);
                debug!("Waiting {:?} before the next Nominatim request", wait);
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    #[instrument(skip(self), fields(lat = point.latitude(), lon = point.longitude()))]
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<Placemark> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=jsonv2&addressdetails=1",
            self.base_url,
            point.latitude(),
            point.longitude()
        );
        debug!("Nominatim request URL: {}", url);

        self.wait_for_request_slot().await;
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherWearError::geocode(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(WeatherWearError::geocode(format!(
                "Nominatim returned status {}",
                response.status()
            )));
        }

        let body: NominatimResponse = response
            .json()
            .await
            .map_err(|e| WeatherWearError::geocode(format!("invalid response: {e}")))?;

        if let Some(error) = body.error {
            return Err(WeatherWearError::geocode(error));
        }

        let placemark = Placemark::from(body);
        info!(
            "Reverse geocoded {} to {:?} / {:?}",
            point, placemark.name, placemark.locality
        );
        Ok(placemark)
    }
}
