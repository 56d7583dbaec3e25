//! # citizen-report
//!
//! Client for filing coastal hazard reports: log in with a one-time
//! password, describe the hazard, attach up to three photos and one video,
//! tag the location, and post the report to the reports API.
//!
//! Device capabilities are traits so the same workflow runs against real
//! services or scripted test doubles:
//!
//! - [`capture::Camera`] for photos and video
//! - [`location::PositionSource`] and [`location::Geocoder`] for "use my location"
//! - [`api::ReportSink`] for submission
//! - [`session::KeyValueStore`] and [`session::OtpSender`] for login
//!
//! ## Quick Start
//!
//! ```bash
//! citizen login
//! citizen report --hazard storm-surges -d "Water over the sea wall" \
//!     --image wall.jpg --lat 13.0500 --lon 80.2824
//! ```

pub mod api;
pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod location;
pub mod navigation;
pub mod report;
pub mod session;

pub use cli::{Cli, Output};
pub use config::AppConfig;
pub use error::{Error, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
