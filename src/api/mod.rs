//! Remote reports API
//!
//! The form controller only knows the [`ReportSink`] seam; [`ReportsClient`]
//! is the HTTP implementation used by the binary.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::report::ReportDraft;

mod client;

pub use client::ReportsClient;

/// Path of the reports collection, relative to the API base URL
pub const REPORTS_PATH: &str = "/reports/";

/// Destination for finished reports
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Deliver one report. Returns whatever the server answered with.
    async fn submit(&self, draft: &ReportDraft) -> Result<Value>;
}
