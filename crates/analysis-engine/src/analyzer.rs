//! The remote analyzer boundary.

use async_trait::async_trait;

use snapready_scene_model::{AnalysisFailure, AnalysisResult, FaceBox, FrameImage};

/// Trait for a remote face/emotion/vision analysis service.
///
/// Implementations wrap the actual network clients. Each method performs
/// one remote call for one encoded frame and either returns a completed
/// [`AnalysisResult`] or a failure signal; retry, backoff, and deadlines
/// are the implementation's business, never the caller's.
///
/// Contract: faces in a returned result are in a stable order, and when
/// emotion scores are present they parallel the faces index for index.
/// Failures carry the originating API; the dispatcher stamps the frame
/// index afterwards.
#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    /// Detect faces with head-pose, smile, and eye-landmark attributes.
    async fn detect_faces(&self, image: &FrameImage) -> Result<AnalysisResult, AnalysisFailure>;

    /// Recognize per-face emotions. When `face_hints` is given, the remote
    /// service skips its own detection pass and scores those boxes.
    async fn recognize_emotions(
        &self,
        image: &FrameImage,
        face_hints: Option<&[FaceBox]>,
    ) -> Result<AnalysisResult, AnalysisFailure>;

    /// Tag the overall scene.
    async fn tag_scene(&self, image: &FrameImage) -> Result<AnalysisResult, AnalysisFailure>;

    /// Identify celebrities among the detected faces.
    async fn identify_celebrities(
        &self,
        image: &FrameImage,
    ) -> Result<AnalysisResult, AnalysisFailure>;
}
