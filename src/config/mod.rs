//! Configuration management for citizen-report
//!
//! Settings are layered with figment: embedded defaults, then user and
//! project files, then `CITIZEN_` environment variables. See [`ConfigLoader`] for
//! the merge order.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

mod core;
mod smart_load;

pub use self::core::ConfigLoader;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote reports API
    pub api: ApiConfig,

    /// Answers to the device permission prompts
    pub permissions: PermissionsConfig,

    /// Positioning and reverse geocoding
    pub location: LocationConfig,

    /// Local key-value storage
    pub storage: StorageConfig,

    /// OTP login
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; reports live at `{base_url}/reports/`
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionsConfig {
    pub camera: bool,
    pub location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Look up a street address for acquired coordinates
    pub reverse_geocode: bool,

    /// Nominatim-compatible service
    pub geocoder_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// State file; empty selects the platform data directory
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpDelivery {
    Console,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub otp_delivery: OtpDelivery,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl StorageConfig {
    /// Explicit state file path, if one is configured
    pub fn custom_path(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
