//! Media capture adapter
//!
//! Wraps a [`Camera`] and enforces the per-report media limits before the
//! camera is ever asked for anything. Captured media is referenced by URI
//! only; nothing is compressed, validated or uploaded here.

use async_trait::async_trait;

use crate::error::{Capability, Error, Result};
use crate::report::{MediaKind, ReportDraft};

mod file;

pub use file::FileCamera;

/// A device camera
#[async_trait]
pub trait Camera: Send {
    /// Ask the user for camera access. Returns whether it was granted.
    async fn request_permission(&mut self) -> Result<bool>;

    /// Launch the capture UI. `None` means the user cancelled.
    async fn capture(&mut self, kind: MediaKind) -> Result<Option<String>>;
}

/// What happened to a capture request that passed the limit and permission gates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured(String),
    Cancelled,
}

/// Adapter that fills a draft's media slots from a camera
pub struct MediaCapture<C: Camera> {
    camera: C,
}

impl<C: Camera> MediaCapture<C> {
    pub fn new(camera: C) -> Self {
        Self { camera }
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Capture a still image and append it to the draft
    pub async fn capture_image(&mut self, draft: &mut ReportDraft) -> Result<CaptureOutcome> {
        self.capture(MediaKind::Image, draft).await
    }

    /// Capture the report's single video
    pub async fn capture_video(&mut self, draft: &mut ReportDraft) -> Result<CaptureOutcome> {
        self.capture(MediaKind::Video, draft).await
    }

    async fn capture(&mut self, kind: MediaKind, draft: &mut ReportDraft) -> Result<CaptureOutcome> {
        if !draft.has_room_for(kind) {
            tracing::debug!("{} limit reached, camera not invoked", kind);
            return Err(Error::LimitReached(kind, kind.limit()));
        }

        if !self.camera.request_permission().await? {
            tracing::warn!("Camera permission denied");
            return Err(Error::PermissionDenied(Capability::Camera));
        }

        match self.camera.capture(kind).await? {
            Some(uri) => {
                draft.attach(kind, uri.clone())?;
                tracing::debug!("Attached {} {}", kind, uri);
                Ok(CaptureOutcome::Captured(uri))
            }
            None => {
                tracing::debug!("{} capture cancelled", kind);
                Ok(CaptureOutcome::Cancelled)
            }
        }
    }
}
