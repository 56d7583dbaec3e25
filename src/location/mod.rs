//! Location adapter
//!
//! Combines a [`PositionSource`] and a [`Geocoder`] into a single
//! "use my location" action. Coordinates are recorded even when reverse
//! geocoding finds nothing; any error leaves the draft untouched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Capability, Error, Result};
use crate::report::{Coordinates, ReportDraft};

mod fixed;
mod nominatim;

pub use fixed::{FixedPosition, NoGeocoder};
pub use nominatim::NominatimGeocoder;

/// Requested positioning accuracy. Hazard reports always ask for the best fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Highest,
}

/// Source of the device's current position
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Ask for foreground location access. Returns whether it was granted.
    async fn request_permission(&self) -> Result<bool>;

    async fn current_position(&self, accuracy: Accuracy) -> Result<Coordinates>;
}

/// Reverse geocoding service
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Places near the coordinates, best match first. May be empty.
    async fn reverse(&self, coords: Coordinates) -> Result<Vec<Place>>;
}

#[async_trait]
impl Geocoder for Box<dyn Geocoder> {
    async fn reverse(&self, coords: Coordinates) -> Result<Vec<Place>> {
        (**self).reverse(coords).await
    }
}

/// One reverse geocoding result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl Place {
    /// Single-line address; missing parts stay empty so the layout is stable
    pub fn address_line(&self) -> String {
        [&self.name, &self.city, &self.region, &self.country]
            .iter()
            .map(|part| part.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A location fix as recorded on the draft
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFix {
    pub coords: Coordinates,
    pub address: Option<String>,
}

/// Adapter that fills a draft's location fields
pub struct LocationAdapter<P: PositionSource, G: Geocoder> {
    position: P,
    geocoder: G,
}

impl<P: PositionSource, G: Geocoder> LocationAdapter<P, G> {
    pub fn new(position: P, geocoder: G) -> Self {
        Self { position, geocoder }
    }

    /// Acquire the current position and its address and store both on the draft
    pub async fn acquire_location(&self, draft: &mut ReportDraft) -> Result<LocationFix> {
        if !self.position.request_permission().await? {
            tracing::warn!("Location permission denied");
            return Err(Error::PermissionDenied(Capability::Location));
        }

        let fix = self.locate().await.map_err(|e| match e {
            Error::LocationUnavailable(msg) => Error::LocationUnavailable(msg),
            other => Error::location(other.to_string()),
        })?;

        draft.set_location(fix.coords, fix.address.clone());
        tracing::info!("Location acquired: {}", fix.coords);
        Ok(fix)
    }

    async fn locate(&self) -> Result<LocationFix> {
        let coords = self.position.current_position(Accuracy::Highest).await?;
        if !coords.is_valid() {
            return Err(Error::location(format!("invalid coordinates {}", coords)));
        }

        let places = self.geocoder.reverse(coords).await?;
        let address = places.first().map(Place::address_line);
        if address.is_none() {
            tracing::debug!("No address found for {}", coords);
        }

        Ok(LocationFix { coords, address })
    }
}
