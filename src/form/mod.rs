//! Report form controller
//!
//! Owns the draft for one form session and drives it through
//! `Empty -> Drafting -> Submitting -> Submitted | Failed`. A failed
//! submission drops back to `Drafting` with the draft intact so the user can
//! retry without typing anything again.

use serde_json::Value;

use crate::api::ReportSink;
use crate::capture::{Camera, CaptureOutcome, MediaCapture};
use crate::error::{Error, Result};
use crate::location::{Geocoder, LocationAdapter, LocationFix, PositionSource};
use crate::report::{HazardType, ReportDraft};

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Empty,
    Drafting,
    Submitting,
    Submitted,
    /// Transient: entered when the sink rejects a submission, then left for
    /// `Drafting` before `submit` returns. The draft is kept for a retry and
    /// the message stays in [`ReportForm::last_error`].
    Failed,
}

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct Submission {
    /// Recap of what was sent
    pub summary: String,
    /// Server response body
    pub response: Value,
}

/// One report form session
pub struct ReportForm<S: ReportSink> {
    sink: S,
    draft: ReportDraft,
    state: FormState,
    last_error: Option<String>,
}

impl<S: ReportSink> ReportForm<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            draft: ReportDraft::new(),
            state: FormState::Empty,
            last_error: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    /// Message of the most recent failed submission, if the draft has not
    /// been sent successfully since
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply an arbitrary edit to the draft
    pub fn edit(&mut self, f: impl FnOnce(&mut ReportDraft)) {
        f(&mut self.draft);
        self.touch();
    }

    pub fn set_hazard_type(&mut self, hazard: HazardType) {
        self.edit(|d| d.set_hazard_type(hazard));
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        self.edit(|d| d.set_description(description));
    }

    pub async fn capture_image<C: Camera>(
        &mut self,
        capture: &mut MediaCapture<C>,
    ) -> Result<CaptureOutcome> {
        let outcome = capture.capture_image(&mut self.draft).await?;
        self.touch();
        Ok(outcome)
    }

    pub async fn capture_video<C: Camera>(
        &mut self,
        capture: &mut MediaCapture<C>,
    ) -> Result<CaptureOutcome> {
        let outcome = capture.capture_video(&mut self.draft).await?;
        self.touch();
        Ok(outcome)
    }

    pub async fn acquire_location<P: PositionSource, G: Geocoder>(
        &mut self,
        adapter: &LocationAdapter<P, G>,
    ) -> Result<LocationFix> {
        let fix = adapter.acquire_location(&mut self.draft).await?;
        self.touch();
        Ok(fix)
    }

    /// Send the draft. Blocked without a transition when the required fields
    /// are missing.
    pub async fn submit(&mut self) -> Result<Submission> {
        self.draft.validate()?;

        self.state = FormState::Submitting;
        tracing::info!("Submitting report");

        match self.sink.submit(&self.draft).await {
            Ok(response) => {
                let summary = self.draft.summary();
                self.draft.clear();
                self.last_error = None;
                self.state = FormState::Submitted;
                tracing::info!("Report submitted");
                Ok(Submission { summary, response })
            }
            Err(e) => {
                self.state = FormState::Failed;
                tracing::warn!("Report submission failed: {}", e);
                self.last_error = Some(e.to_string());
                self.touch();
                Err(e)
            }
        }
    }

    /// Serialized request body the next submission would carry
    pub fn payload(&self) -> Result<Value> {
        self.draft.validate()?;
        serde_json::to_value(&self.draft).map_err(Error::from)
    }

    fn touch(&mut self) {
        if self.state != FormState::Drafting {
            tracing::debug!("Form {:?} -> Drafting", self.state);
        }
        self.state = FormState::Drafting;
    }
}
