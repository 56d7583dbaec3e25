use async_trait::async_trait;

use super::{Accuracy, Geocoder, Place, PositionSource};
use crate::error::{Error, Result};
use crate::report::Coordinates;

/// Position source reporting coordinates supplied by the user
pub struct FixedPosition {
    allowed: bool,
    coords: Option<Coordinates>,
}

impl FixedPosition {
    pub fn new(allowed: bool, coords: Option<Coordinates>) -> Self {
        Self { allowed, coords }
    }
}

#[async_trait]
impl PositionSource for FixedPosition {
    async fn request_permission(&self) -> Result<bool> {
        Ok(self.allowed)
    }

    async fn current_position(&self, _accuracy: Accuracy) -> Result<Coordinates> {
        self.coords
            .ok_or_else(|| Error::location("no position fix available"))
    }
}

/// Geocoder used when reverse geocoding is switched off
pub struct NoGeocoder;

#[async_trait]
impl Geocoder for NoGeocoder {
    async fn reverse(&self, _coords: Coordinates) -> Result<Vec<Place>> {
        Ok(Vec::new())
    }
}
