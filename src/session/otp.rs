use async_trait::async_trait;
use rand::Rng;
use std::io::Write;
use std::sync::Mutex;

use super::{KeyValueStore, LoginSession};
use crate::error::{Error, Result};
use crate::navigation::{Navigator, Route};

/// Produces one-time codes
pub trait OtpGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniform four-digit code in `1000..=9999`
pub struct RandomOtp;

impl OtpGenerator for RandomOtp {
    fn generate(&self) -> String {
        rand::thread_rng().gen_range(1000..=9999).to_string()
    }
}

/// Delivers a code to the user's phone, e.g. through an SMS gateway
#[async_trait]
pub trait OtpSender: Send + Sync {
    async fn send(&self, mobile: &str, code: &str) -> Result<()>;
}

/// Development sender that shows the code on a terminal instead of texting it
pub struct ConsoleOtpSender<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleOtpSender<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> OtpSender for ConsoleOtpSender<W> {
    async fn send(&self, mobile: &str, code: &str) -> Result<()> {
        tracing::warn!("OTP for {} shown on the console; configure an SMS gateway for real use", mobile);
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(out, "Your OTP is: {}", code)?;
        out.flush()?;
        Ok(())
    }
}

/// State of one login attempt
pub struct LoginFlow<G: OtpGenerator, S: OtpSender> {
    generator: G,
    sender: S,
    pending: Option<String>,
}

impl<G: OtpGenerator, S: OtpSender> LoginFlow<G, S> {
    pub fn new(generator: G, sender: S) -> Self {
        Self {
            generator,
            sender,
            pending: None,
        }
    }

    pub fn otp_sent(&self) -> bool {
        self.pending.is_some()
    }

    /// Generate a fresh code and deliver it. A new code replaces any earlier one.
    pub async fn send_otp(&mut self, mobile: &str) -> Result<()> {
        if mobile.trim().is_empty() {
            return Err(Error::validation("Please enter mobile number"));
        }
        let code = self.generator.generate();
        self.sender.send(mobile.trim(), &code).await?;
        self.pending = Some(code);
        tracing::info!("OTP sent to {}", mobile.trim());
        Ok(())
    }

    /// Check the entered code. On a match the session is persisted and the
    /// current screen is replaced by the report screen.
    pub async fn login(
        &mut self,
        username: &str,
        mobile: &str,
        otp: &str,
        store: &dyn KeyValueStore,
        nav: &mut Navigator,
    ) -> Result<()> {
        if [username, mobile, otp].iter().any(|v| v.trim().is_empty()) {
            return Err(Error::validation("Please fill all fields"));
        }
        if self.pending.as_deref() != Some(otp.trim()) {
            tracing::warn!("Rejected OTP for {}", mobile.trim());
            return Err(Error::InvalidOtp);
        }

        LoginSession::mark_logged_in(store).await?;
        self.pending = None;
        nav.replace(Route::Report);
        tracing::info!("User {} logged in", username.trim());
        Ok(())
    }
}
