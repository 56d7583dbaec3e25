use std::collections::VecDeque;
use std::path::PathBuf;

use async_trait::async_trait;

use super::Camera;
use crate::error::Result;
use crate::report::MediaKind;

/// Camera backed by files on disk.
///
/// Each capture takes the next queued path of the requested kind. Running out
/// of paths, or a path that does not exist, counts as a cancelled capture.
pub struct FileCamera {
    allowed: bool,
    images: VecDeque<PathBuf>,
    videos: VecDeque<PathBuf>,
}

impl FileCamera {
    pub fn new(allowed: bool) -> Self {
        Self {
            allowed,
            images: VecDeque::new(),
            videos: VecDeque::new(),
        }
    }

    pub fn with_images(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.images.extend(paths);
        self
    }

    pub fn with_videos(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.videos.extend(paths);
        self
    }
}

#[async_trait]
impl Camera for FileCamera {
    async fn request_permission(&mut self) -> Result<bool> {
        Ok(self.allowed)
    }

    async fn capture(&mut self, kind: MediaKind) -> Result<Option<String>> {
        let queue = match kind {
            MediaKind::Image => &mut self.images,
            MediaKind::Video => &mut self.videos,
        };
        let Some(path) = queue.pop_front() else {
            return Ok(None);
        };

        match tokio::fs::canonicalize(&path).await {
            Ok(absolute) => Ok(Some(format!("file://{}", absolute.display()))),
            Err(e) => {
                tracing::warn!("Skipping {} {}: {}", kind, path.display(), e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_captures_existing_files_as_uris() {
        let dir = TempDir::new().unwrap();
        let photo = dir.path().join("photo.jpg");
        std::fs::write(&photo, b"jpeg").unwrap();

        let mut camera = FileCamera::new(true).with_images([photo.clone()]);
        assert!(camera.request_permission().await.unwrap());

        let uri = camera.capture(MediaKind::Image).await.unwrap().unwrap();
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("photo.jpg"));

        // queue exhausted
        assert!(camera.capture(MediaKind::Image).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_cancelled() {
        let mut camera = FileCamera::new(true).with_videos([PathBuf::from("/no/such/clip.mp4")]);
        assert!(camera.capture(MediaKind::Video).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_permission_follows_flag() {
        let mut camera = FileCamera::new(false);
        assert!(!camera.request_permission().await.unwrap());
    }
}
