use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use super::{REPORTS_PATH, ReportSink};
use crate::error::{Error, Result};
use crate::report::ReportDraft;

/// HTTP client for the reports endpoint
#[derive(Clone)]
pub struct ReportsClient {
    client: Client,
    base_url: String,
}

impl ReportsClient {
    /// Create a new client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("citizen-report/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn reports_url(&self) -> String {
        format!("{}{}", self.base_url, REPORTS_PATH)
    }

    /// POST a report. Any non-2xx answer or transport failure is a
    /// [`Error::SubmissionFailed`]; nothing is retried.
    pub async fn create_report(&self, draft: &ReportDraft) -> Result<Value> {
        let url = self.reports_url();
        debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| Error::unreachable(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::unreachable(e.to_string()))?;

        if !status.is_success() {
            let reason = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unexpected status").to_string()
            } else {
                body
            };
            return Err(Error::rejected(status.as_u16(), reason));
        }

        info!("Report accepted with status {}", status);
        Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
    }

    /// GET every report the server holds
    pub async fn list_reports(&self) -> Result<Vec<Value>> {
        let url = self.reports_url();
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::RequestFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::RequestFailed(e.to_string()))?;

        resp.json()
            .await
            .map_err(|e| Error::RequestFailed(format!("unexpected response body: {}", e)))
    }
}

#[async_trait]
impl ReportSink for ReportsClient {
    async fn submit(&self, draft: &ReportDraft) -> Result<Value> {
        self.create_report(draft).await
    }
}
