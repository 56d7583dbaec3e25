//! Error types for citizen-report
//!
//! Every failure a report session can hit is a variant of [`Error`]. None of
//! them are fatal: the caller shows the message and the session stays usable.

use std::fmt;

use thiserror::Error;

use crate::report::MediaKind;

/// Result type alias for citizen-report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Device capability guarded by a permission prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Camera,
    Location,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Camera => write!(f, "camera"),
            Capability::Location => write!(f, "location"),
        }
    }
}

/// Main error type for citizen-report operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required field is missing
    #[error("{0}")]
    Validation(String),

    /// The user denied access to a device capability
    #[error("{0} permission is required")]
    PermissionDenied(Capability),

    /// The draft already holds the maximum number of media items of this kind
    #[error("you can add only {1} {0}(s)")]
    LimitReached(MediaKind, usize),

    /// Positioning or reverse geocoding failed
    #[error("unable to get current location: {0}")]
    LocationUnavailable(String),

    /// The report could not be delivered to the server
    #[error("failed to create report: {reason}")]
    SubmissionFailed {
        /// HTTP status, when the server answered at all
        status: Option<u16>,
        reason: String,
    },

    /// A read request against the reports endpoint failed
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The entered OTP does not match the one that was sent
    #[error("Invalid OTP")]
    InvalidOtp,

    /// Local key-value storage failure
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a location error
    pub fn location(msg: impl Into<String>) -> Self {
        Self::LocationUnavailable(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a submission error carrying the HTTP status
    pub fn rejected(status: u16, reason: impl Into<String>) -> Self {
        Self::SubmissionFailed {
            status: Some(status),
            reason: reason.into(),
        }
    }

    /// Create a submission error for a request that never got a response
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::SubmissionFailed {
            status: None,
            reason: reason.into(),
        }
    }

    /// Short title for the error, used as the heading of user-facing alerts
    pub fn title(&self) -> &'static str {
        match self {
            Error::PermissionDenied(_) => "Permission Denied",
            Error::LimitReached(..) => "Limit Reached",
            _ => "Error",
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}
