//! The photo-readiness gate.
//!
//! An ordered chain of acceptance checks evaluated once per completed
//! analysis result, short-circuiting at the first failure:
//!
//! 1. Presence (at least one face) — skipped while movement checks are
//!    suppressed
//! 2. Stillness (no face moved since the previous evaluated result)
//! 3. Orientation (every face within the head-yaw limit)
//! 4. Eyes open (no face with both eyes below the aspect-ratio threshold)
//! 5. Smiling (every face above the smile threshold)
//!
//! The orientation check carries a side effect: failing it suppresses the
//! presence and stillness checks on the next evaluation only, so the gate
//! can re-test orientation without being blocked by the residual motion of
//! the subject turning back toward the camera.

use snapready_scene_model::{AnalysisFailure, AnalysisResult, Face, Frame, Point};

use crate::motion::MotionTracker;

/// Maximum absolute head yaw (degrees) still counted as facing the camera.
const MAX_HEAD_YAW: f64 = 25.0;

/// Eye aspect ratio (height/width) below which an eye counts as closed.
const EYE_OPEN_RATIO: f64 = 0.15;

/// Smile confidence strictly above this passes the smile check.
const SMILE_THRESHOLD: f64 = 0.5;

/// Readiness indicator shown next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorColor {
    Green,
    Red,
}

/// The gate's user-facing output for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Whether the frame passed every check.
    pub accepted: bool,

    /// Guidance message; empty when accepted.
    pub message: String,

    /// Indicator color for the message area.
    pub indicator: IndicatorColor,
}

impl Verdict {
    fn accepted() -> Self {
        Self {
            accepted: true,
            message: String::new(),
            indicator: IndicatorColor::Green,
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            message: message.into(),
            indicator: IndicatorColor::Red,
        }
    }

    /// The verdict shown when an upstream analysis call failed.
    pub fn upstream_failure(failure: &AnalysisFailure) -> Self {
        Self::rejected(failure.to_string())
    }
}

/// The ordered, short-circuiting acceptance pipeline.
///
/// Owns all mutable gate state (the motion tracker and the movement-check
/// suppression flag). Not safe for concurrent use; results must be
/// evaluated in delivery order.
#[derive(Debug, Default)]
pub struct GatingPipeline {
    motion: MotionTracker,
    suppress_movement_check: bool,
}

impl GatingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one completed analysis result against the current frame.
    ///
    /// Call exactly once per result, in delivery order.
    pub fn evaluate(&mut self, frame: &Frame, result: &AnalysisResult) -> Verdict {
        if !self.suppress_movement_check {
            if result.faces.is_empty() {
                return Verdict::rejected("no people");
            }
            if !self.motion.is_still(frame, result) {
                return Verdict::rejected("please don't move");
            }
        }

        // The orientation check updates the suppression flag whether it
        // passes or fails; a failure buys the next evaluation a bypass of
        // the presence and stillness checks.
        let facing = result.faces.iter().all(is_facing_camera);
        self.suppress_movement_check = !facing;
        if !facing {
            return Verdict::rejected("please look at the camera");
        }

        if !result.faces.iter().all(has_open_eye) {
            return Verdict::rejected("please open your eyes");
        }

        if !result.faces.iter().all(is_smiling) {
            return Verdict::rejected("please smile");
        }

        Verdict::accepted()
    }

    /// Process one delivered analysis outcome end to end: failures become
    /// red verdicts, successful results are reconciled against the frame's
    /// local detections (when present) and then evaluated.
    pub fn process_delivery(
        &mut self,
        frame: &Frame,
        outcome: &Result<AnalysisResult, AnalysisFailure>,
    ) -> Verdict {
        match outcome {
            Err(failure) => {
                tracing::debug!(frame = frame.index, %failure, "Upstream failure surfaced");
                Verdict::upstream_failure(failure)
            }
            Ok(result) => {
                let mut result = result.clone();
                if let Some(local) = &frame.local_faces {
                    crate::reconcile::reconcile_face_rects(&mut result.faces, local);
                }
                self.evaluate(frame, &result)
            }
        }
    }
}

fn is_facing_camera(face: &Face) -> bool {
    match &face.attributes {
        Some(attrs) => attrs.head_yaw.abs() <= MAX_HEAD_YAW,
        None => false,
    }
}

fn is_smiling(face: &Face) -> bool {
    match &face.attributes {
        Some(attrs) => attrs.smile_score > SMILE_THRESHOLD,
        None => false,
    }
}

/// A face passes as long as at least one eye is open; a single squinting
/// eye does not fail the check. Missing landmarks count as closed.
fn has_open_eye(face: &Face) -> bool {
    let Some(landmarks) = face.attributes.as_ref().and_then(|a| a.landmarks.as_ref()) else {
        return false;
    };

    let left = eye_aspect_ratio(
        landmarks.eye_left_top,
        landmarks.eye_left_bottom,
        landmarks.eye_left_inner,
        landmarks.eye_left_outer,
    );
    let right = eye_aspect_ratio(
        landmarks.eye_right_top,
        landmarks.eye_right_bottom,
        landmarks.eye_right_inner,
        landmarks.eye_right_outer,
    );

    left >= EYE_OPEN_RATIO || right >= EYE_OPEN_RATIO
}

/// Eye openness as height over width. A degenerate zero-width eye box
/// reads as closed rather than dividing by zero.
fn eye_aspect_ratio(top: Point, bottom: Point, inner: Point, outer: Point) -> f64 {
    let height = (bottom.y - top.y).abs();
    let width = (inner.x - outer.x).abs();
    if width <= 0.0 {
        return 0.0;
    }
    height / width
}
