//! Operating-mode dispatch for remote analysis requests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use snapready_scene_model::{AnalysisFailure, AnalysisResult, ApiKind, Frame};

use crate::analyzer::RemoteAnalyzer;

/// What the remote analyzer is asked for on each submitted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Face detection with attributes and landmarks.
    Faces,
    /// Emotion recognition, remote-side face detection.
    Emotions,
    /// Emotion recognition seeded with local detector boxes, so the remote
    /// service skips its own detection pass.
    EmotionsWithLocalDetect,
    /// Scene tagging.
    Tags,
    /// Celebrity identification.
    Celebrities,
}

impl AnalysisMode {
    /// Which remote API serves this mode.
    pub fn api(&self) -> ApiKind {
        match self {
            AnalysisMode::Faces => ApiKind::Face,
            AnalysisMode::Emotions | AnalysisMode::EmotionsWithLocalDetect => ApiKind::Emotion,
            AnalysisMode::Tags | AnalysisMode::Celebrities => ApiKind::Vision,
        }
    }
}

/// Per-API counters for completed remote calls.
///
/// Write side belongs to the dispatcher; readers take snapshots for
/// display. Only successful calls are counted, matching what the metered
/// services bill as completed transactions.
#[derive(Debug, Default)]
pub struct ApiCallCounters {
    face: AtomicU64,
    emotion: AtomicU64,
    vision: AtomicU64,
}

/// A read-only copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApiCallSnapshot {
    pub face: u64,
    pub emotion: u64,
    pub vision: u64,
}

impl ApiCallCounters {
    fn record(&self, api: ApiKind) {
        let counter = match api {
            ApiKind::Face => &self.face,
            ApiKind::Emotion => &self.emotion,
            ApiKind::Vision => &self.vision,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ApiCallSnapshot {
        ApiCallSnapshot {
            face: self.face.load(Ordering::Relaxed),
            emotion: self.emotion.load(Ordering::Relaxed),
            vision: self.vision.load(Ordering::Relaxed),
        }
    }
}

/// Routes each submitted frame to the remote request its operating mode
/// calls for.
pub struct AnalysisDispatcher {
    analyzer: Arc<dyn RemoteAnalyzer>,
    mode: AnalysisMode,
    counters: Arc<ApiCallCounters>,
}

impl AnalysisDispatcher {
    pub fn new(analyzer: Arc<dyn RemoteAnalyzer>, mode: AnalysisMode) -> Self {
        Self {
            analyzer,
            mode,
            counters: Arc::new(ApiCallCounters::default()),
        }
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// Shared handle to the call counters.
    pub fn counters(&self) -> Arc<ApiCallCounters> {
        self.counters.clone()
    }

    /// Submit one frame for remote analysis.
    ///
    /// In [`AnalysisMode::EmotionsWithLocalDetect`] the frame's local
    /// detections are forwarded as hints. Failures come back stamped with
    /// the frame's index.
    pub async fn analyze(&self, frame: &Frame) -> Result<AnalysisResult, AnalysisFailure> {
        let outcome = match self.mode {
            AnalysisMode::Faces => self.analyzer.detect_faces(&frame.image).await,
            AnalysisMode::Emotions => self.analyzer.recognize_emotions(&frame.image, None).await,
            AnalysisMode::EmotionsWithLocalDetect => {
                self.analyzer
                    .recognize_emotions(&frame.image, frame.local_faces.as_deref())
                    .await
            }
            AnalysisMode::Tags => self.analyzer.tag_scene(&frame.image).await,
            AnalysisMode::Celebrities => self.analyzer.identify_celebrities(&frame.image).await,
        };

        match outcome {
            Ok(result) => {
                self.counters.record(self.mode.api());
                debug_assert!(
                    result.is_consistent(),
                    "analyzer produced mismatched faces/scores lengths"
                );
                Ok(result)
            }
            Err(mut failure) => {
                failure.frame_index = frame.index;
                tracing::warn!(
                    api = failure.api.display_name(),
                    frame = frame.index,
                    "remote analysis call failed"
                );
                Err(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use snapready_scene_model::{Face, FaceBox, FailureKind, FrameImage};
    use std::sync::Mutex;

    /// Records which endpoint was hit and with what hints.
    #[derive(Default)]
    struct RecordingAnalyzer {
        calls: Mutex<Vec<String>>,
        fail_with: Option<AnalysisFailure>,
    }

    impl RecordingAnalyzer {
        fn log(&self, entry: impl Into<String>) -> Result<AnalysisResult, AnalysisFailure> {
            self.calls.lock().unwrap().push(entry.into());
            match &self.fail_with {
                Some(failure) => Err(failure.clone()),
                None => Ok(AnalysisResult::from_faces(vec![Face::from_rect(
                    FaceBox::new(0.0, 0.0, 10.0, 10.0),
                )])),
            }
        }
    }

    #[async_trait]
    impl RemoteAnalyzer for RecordingAnalyzer {
        async fn detect_faces(
            &self,
            _image: &FrameImage,
        ) -> Result<AnalysisResult, AnalysisFailure> {
            self.log("faces")
        }

        async fn recognize_emotions(
            &self,
            _image: &FrameImage,
            face_hints: Option<&[FaceBox]>,
        ) -> Result<AnalysisResult, AnalysisFailure> {
            self.log(format!(
                "emotions hints={}",
                face_hints.map(<[FaceBox]>::len).unwrap_or(0)
            ))
        }

        async fn tag_scene(&self, _image: &FrameImage) -> Result<AnalysisResult, AnalysisFailure> {
            self.log("tags")
        }

        async fn identify_celebrities(
            &self,
            _image: &FrameImage,
        ) -> Result<AnalysisResult, AnalysisFailure> {
            self.log("celebrities")
        }
    }

    fn frame(index: u64) -> Frame {
        Frame::new(FrameImage::new(vec![], 640, 480), index)
    }

    #[tokio::test]
    async fn test_mode_routes_to_matching_endpoint() {
        for (mode, expected) in [
            (AnalysisMode::Faces, "faces"),
            (AnalysisMode::Emotions, "emotions hints=0"),
            (AnalysisMode::Tags, "tags"),
            (AnalysisMode::Celebrities, "celebrities"),
        ] {
            let analyzer = Arc::new(RecordingAnalyzer::default());
            let dispatcher = AnalysisDispatcher::new(analyzer.clone(), mode);
            dispatcher.analyze(&frame(0)).await.unwrap();
            assert_eq!(analyzer.calls.lock().unwrap().as_slice(), [expected]);
        }
    }

    #[tokio::test]
    async fn test_local_detect_mode_forwards_hints() {
        let analyzer = Arc::new(RecordingAnalyzer::default());
        let dispatcher =
            AnalysisDispatcher::new(analyzer.clone(), AnalysisMode::EmotionsWithLocalDetect);

        let frame = frame(0).with_local_faces(vec![
            FaceBox::new(0.0, 0.0, 10.0, 10.0),
            FaceBox::new(50.0, 0.0, 10.0, 10.0),
        ]);
        dispatcher.analyze(&frame).await.unwrap();

        assert_eq!(
            analyzer.calls.lock().unwrap().as_slice(),
            ["emotions hints=2"]
        );
    }

    #[tokio::test]
    async fn test_successful_calls_are_counted_per_api() {
        let analyzer = Arc::new(RecordingAnalyzer::default());
        let dispatcher = AnalysisDispatcher::new(analyzer, AnalysisMode::Faces);

        dispatcher.analyze(&frame(0)).await.unwrap();
        dispatcher.analyze(&frame(1)).await.unwrap();

        let snapshot = dispatcher.counters().snapshot();
        assert_eq!(snapshot.face, 2);
        assert_eq!(snapshot.emotion, 0);
        assert_eq!(snapshot.vision, 0);
    }

    #[tokio::test]
    async fn test_failures_are_stamped_and_not_counted() {
        let analyzer = Arc::new(RecordingAnalyzer {
            fail_with: Some(AnalysisFailure::timeout(ApiKind::Face, 0)),
            ..Default::default()
        });
        let dispatcher = AnalysisDispatcher::new(analyzer, AnalysisMode::Faces);

        let failure = dispatcher.analyze(&frame(42)).await.unwrap_err();
        assert_eq!(failure.frame_index, 42);
        assert_eq!(failure.kind, FailureKind::Timeout);
        assert_eq!(dispatcher.counters().snapshot().face, 0);
    }
}
