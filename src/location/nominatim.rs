use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{Geocoder, Place};
use crate::error::{Error, Result};
use crate::report::Coordinates;

/// Reverse geocoder speaking the Nominatim `/reverse` API
#[derive(Clone)]
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address: Option<AddressParts>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressParts {
    road: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

impl ReverseResponse {
    fn into_place(self) -> Option<Place> {
        if self.error.is_some() {
            return None;
        }
        let parts = self.address.unwrap_or_default();
        let name = self.name.filter(|n| !n.is_empty()).or(parts.road);
        Some(Place {
            name,
            city: parts.city.or(parts.town).or(parts.village),
            region: parts.state,
            country: parts.country,
        })
    }
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("citizen-report/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn reverse(&self, coords: Coordinates) -> Result<Vec<Place>> {
        let url = format!("{}/reverse", self.base_url);
        tracing::debug!("Reverse geocoding {} via {}", coords, url);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::location(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let resp = resp
            .error_for_status()
            .map_err(|e| Error::location(e.to_string()))?;

        let body: ReverseResponse = resp
            .json()
            .await
            .map_err(|e| Error::location(format!("unexpected geocoder response: {}", e)))?;

        Ok(body.into_place().into_iter().collect())
    }
}
