use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The fixed set of coastal hazard categories a citizen can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardType {
    #[serde(rename = "Tropical Cyclones")]
    TropicalCyclones,
    #[serde(rename = "Storm Surges")]
    StormSurges,
    #[serde(rename = "Tsunamis")]
    Tsunamis,
    #[serde(rename = "Coastal Erosion")]
    CoastalErosion,
    #[serde(rename = "Sea Level Rise")]
    SeaLevelRise,
}

impl HazardType {
    pub const ALL: [HazardType; 5] = [
        HazardType::TropicalCyclones,
        HazardType::StormSurges,
        HazardType::Tsunamis,
        HazardType::CoastalErosion,
        HazardType::SeaLevelRise,
    ];

    /// Label shown to the user and sent over the wire
    pub fn label(&self) -> &'static str {
        match self {
            HazardType::TropicalCyclones => "Tropical Cyclones",
            HazardType::StormSurges => "Storm Surges",
            HazardType::Tsunamis => "Tsunamis",
            HazardType::CoastalErosion => "Coastal Erosion",
            HazardType::SeaLevelRise => "Sea Level Rise",
        }
    }

    /// Kebab-case form accepted on the command line
    pub fn slug(&self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HazardType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        HazardType::ALL
            .into_iter()
            .find(|h| h.label().to_lowercase() == wanted)
            .ok_or_else(|| Error::validation(format!("Unknown hazard type: {}", s)))
    }
}

/// Kind of media a draft can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// How many items of this kind a single report may carry
    pub fn limit(&self) -> usize {
        match self {
            MediaKind::Image => 3,
            MediaKind::Video => 1,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// A GPS fix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= 90.0
            && self.longitude.abs() <= 180.0
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazard_parsing_accepts_labels_and_slugs() {
        assert_eq!("Storm Surges".parse::<HazardType>().unwrap(), HazardType::StormSurges);
        assert_eq!("sea-level-rise".parse::<HazardType>().unwrap(), HazardType::SeaLevelRise);
        assert_eq!("TSUNAMIS".parse::<HazardType>().unwrap(), HazardType::Tsunamis);
        assert!("Earthquake".parse::<HazardType>().is_err());
    }

    #[test]
    fn test_hazard_serializes_as_label() {
        let json = serde_json::to_string(&HazardType::CoastalErosion).unwrap();
        assert_eq!(json, "\"Coastal Erosion\"");
        for hazard in HazardType::ALL {
            assert_eq!(hazard.slug().parse::<HazardType>().unwrap(), hazard);
        }
    }

    #[test]
    fn test_coordinates_display_and_range() {
        let coords = Coordinates::new(12.971598, 77.594566);
        assert_eq!(coords.to_string(), "12.97160, 77.59457");
        assert!(coords.is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, f64::NAN).is_valid());
    }
}
