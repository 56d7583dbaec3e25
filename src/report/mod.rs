//! Report data model: hazard categories, coordinates and the draft record

mod draft;
mod types;

pub use draft::{MISSING_FIELDS, ReportDraft};
pub use types::{Coordinates, HazardType, MediaKind};
