//! Login session and OTP login flow
//!
//! The only persisted state is a single flag, `isLoggedIn`, kept in a
//! [`KeyValueStore`]. There is no expiry and no identity attached to it.

use crate::error::Result;

mod otp;
mod store;

pub use otp::{ConsoleOtpSender, LoginFlow, OtpGenerator, OtpSender, RandomOtp};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Storage key of the login flag
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Accessors for the persisted login flag
pub struct LoginSession;

impl LoginSession {
    pub async fn is_logged_in(store: &dyn KeyValueStore) -> Result<bool> {
        Ok(store.get(LOGGED_IN_KEY).await?.as_deref() == Some("true"))
    }

    pub async fn mark_logged_in(store: &dyn KeyValueStore) -> Result<()> {
        store.set(LOGGED_IN_KEY, "true").await
    }

    pub async fn logout(store: &dyn KeyValueStore) -> Result<()> {
        store.remove(LOGGED_IN_KEY).await
    }
}
