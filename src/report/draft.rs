//! In-progress report record
//!
//! A [`ReportDraft`] lives for one form session. Field setters are the only
//! way to mutate it, and the media setters refuse to exceed the per-kind
//! limits so the invariants hold no matter who drives the draft.

use serde::{Deserialize, Serialize};

use super::types::{Coordinates, HazardType, MediaKind};
use crate::error::{Error, Result};

/// Message shown when the required fields are missing
pub const MISSING_FIELDS: &str = "Please select hazard type and add description.";

/// The report being filled in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    #[serde(with = "hazard_or_empty")]
    pub hazard_type: Option<HazardType>,
    pub description: String,
    pub images: Vec<String>,
    pub video: Option<String>,
    pub location: Option<Coordinates>,
    pub address: Option<String>,
}

impl ReportDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been entered yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn set_hazard_type(&mut self, hazard: HazardType) {
        self.hazard_type = Some(hazard);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Whether another item of `kind` still fits
    pub fn has_room_for(&self, kind: MediaKind) -> bool {
        self.media_count(kind) < kind.limit()
    }

    pub fn media_count(&self, kind: MediaKind) -> usize {
        match kind {
            MediaKind::Image => self.images.len(),
            MediaKind::Video => usize::from(self.video.is_some()),
        }
    }

    /// Attach a captured media URI, enforcing the per-kind cap
    pub fn attach(&mut self, kind: MediaKind, uri: impl Into<String>) -> Result<()> {
        if !self.has_room_for(kind) {
            return Err(Error::LimitReached(kind, kind.limit()));
        }
        match kind {
            MediaKind::Image => self.images.push(uri.into()),
            MediaKind::Video => self.video = Some(uri.into()),
        }
        Ok(())
    }

    /// Record a location fix. An absent address leaves any previous one cleared.
    pub fn set_location(&mut self, coords: Coordinates, address: Option<String>) {
        self.location = Some(coords);
        self.address = address;
    }

    /// Check the required-field precondition for submission
    pub fn validate(&self) -> Result<HazardType> {
        match self.hazard_type {
            Some(hazard) if !self.description.trim().is_empty() => Ok(hazard),
            _ => Err(Error::validation(MISSING_FIELDS)),
        }
    }

    /// Reset every field to its initial value
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Human-readable recap, as shown once a report has gone through
    pub fn summary(&self) -> String {
        let hazard = self.hazard_type.map(|h| h.label()).unwrap_or("");
        let location = match &self.location {
            Some(coords) => format!("{}\n{}", coords, self.address.as_deref().unwrap_or("")),
            None => "N/A".to_string(),
        };
        format!(
            "Hazard: {}\nDescription: {}\nImages: {}\nVideo: {}\nLocation: {}",
            hazard,
            self.description,
            self.images.len(),
            if self.video.is_some() { "Yes" } else { "No" },
            location
        )
    }
}

/// Unset hazard types travel as an empty string
mod hazard_or_empty {
    use super::HazardType;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<HazardType>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(hazard) => hazard.serialize(s),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<HazardType>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ReportDraft {
        let mut draft = ReportDraft::new();
        draft.set_hazard_type(HazardType::Tsunamis);
        draft.set_description("Wave damage near the pier");
        draft
    }

    #[test]
    fn test_new_draft_is_empty() {
        let draft = ReportDraft::new();
        assert!(draft.is_empty());
        assert!(draft.hazard_type.is_none());
        assert!(draft.images.is_empty());
        assert!(draft.video.is_none());
        assert!(draft.location.is_none());
        assert!(draft.address.is_none());
    }

    #[test]
    fn test_image_limit_holds() {
        let mut draft = ReportDraft::new();
        for i in 0..3 {
            draft.attach(MediaKind::Image, format!("file:///img{}.jpg", i)).unwrap();
        }
        let err = draft.attach(MediaKind::Image, "file:///img3.jpg").unwrap_err();
        assert!(matches!(err, Error::LimitReached(MediaKind::Image, 3)));
        assert_eq!(draft.images.len(), 3);
        assert_eq!(draft.images[0], "file:///img0.jpg");
    }

    #[test]
    fn test_single_video() {
        let mut draft = ReportDraft::new();
        draft.attach(MediaKind::Video, "file:///a.mp4").unwrap();
        assert!(draft.attach(MediaKind::Video, "file:///b.mp4").is_err());
        assert_eq!(draft.video.as_deref(), Some("file:///a.mp4"));
    }

    #[test]
    fn test_validation_requires_both_fields() {
        let mut draft = ReportDraft::new();
        assert!(matches!(draft.validate(), Err(Error::Validation(_))));

        draft.set_description("something");
        assert!(draft.validate().is_err());

        let mut draft = ReportDraft::new();
        draft.set_hazard_type(HazardType::StormSurges);
        draft.set_description("   ");
        assert!(draft.validate().is_err());

        assert_eq!(filled().validate().unwrap(), HazardType::Tsunamis);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut draft = filled();
        draft.attach(MediaKind::Image, "file:///x.jpg").unwrap();
        draft.set_location(Coordinates::new(1.0, 2.0), Some("Somewhere".into()));
        draft.clear();
        assert_eq!(draft, ReportDraft::default());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let mut draft = filled();
        draft.set_location(Coordinates::new(13.0827, 80.2707), None);
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["hazardType"], "Tsunamis");
        assert_eq!(value["location"]["latitude"], 13.0827);
        assert!(value["video"].is_null());
        assert!(value.get("hazard_type").is_none());

        let empty = serde_json::to_value(ReportDraft::new()).unwrap();
        assert_eq!(empty["hazardType"], "");
    }

    #[test]
    fn test_summary_mentions_media_and_location() {
        let mut draft = filled();
        draft.attach(MediaKind::Video, "file:///v.mp4").unwrap();
        assert!(draft.summary().contains("Video: Yes"));
        assert!(draft.summary().ends_with("Location: N/A"));

        draft.set_location(Coordinates::new(13.08268, 80.27072), Some("Marina, Chennai".into()));
        let summary = draft.summary();
        assert!(summary.contains("Location: 13.08268, 80.27072\nMarina, Chennai"));
        assert!(summary.contains("Images: 0"));
    }
}
