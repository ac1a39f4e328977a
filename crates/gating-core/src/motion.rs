//! Frame-to-frame motion tracking.
//!
//! Stillness is a proxy for absence of motion blur: if every face moved
//! less than a fixed pixel threshold since the previous evaluated result,
//! the scene counts as still.

use snapready_scene_model::{AnalysisResult, Frame};

/// Combined horizontal+vertical displacement (pixels) above which a face
/// counts as having moved.
const MOVE_THRESHOLD: f64 = 20.0;

/// Tracks the previously evaluated frame/result pair and judges whether
/// the scene moved since then.
///
/// Callers must invoke [`MotionTracker::is_still`] at most once per
/// completed analysis result and in delivery order — the tracker's
/// correctness depends on seeing a total order of (frame, result) pairs.
#[derive(Debug, Default)]
pub struct MotionTracker {
    previous: Option<(Frame, AnalysisResult)>,
}

impl MotionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Judge whether the scene is still relative to the previous evaluated
    /// result, then retain `frame`/`result` as the new comparison point.
    ///
    /// Returns `false` on the first call (no history to compare against)
    /// and whenever the face count changed. Faces are compared by result
    /// order — no geometric re-matching happens here. An empty face list
    /// is vacuously still; this quirk is part of the observable contract.
    pub fn is_still(&mut self, frame: &Frame, result: &AnalysisResult) -> bool {
        let verdict = match &self.previous {
            None => false,
            Some((_, prev)) => {
                if prev.faces.len() != result.faces.len() {
                    false
                } else {
                    result.faces.iter().zip(prev.faces.iter()).all(|(curr, prev)| {
                        let displacement = (curr.rect.left - prev.rect.left).abs()
                            + (curr.rect.top - prev.rect.top).abs();
                        displacement <= MOVE_THRESHOLD
                    })
                }
            }
        };

        // The snapshot advances on every path, moved or not.
        self.previous = Some((frame.clone(), result.clone()));
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapready_scene_model::{Face, FaceBox, FrameImage};

    fn frame(index: u64) -> Frame {
        Frame::new(FrameImage::new(vec![], 640, 480), index)
    }

    fn result_with_faces(lefts: &[f64]) -> AnalysisResult {
        AnalysisResult::from_faces(
            lefts
                .iter()
                .map(|&left| Face::from_rect(FaceBox::new(left, 50.0, 30.0, 30.0)))
                .collect(),
        )
    }

    #[test]
    fn test_first_call_is_never_still() {
        let mut tracker = MotionTracker::new();
        assert!(!tracker.is_still(&frame(0), &result_with_faces(&[100.0])));
    }

    #[test]
    fn test_identical_geometry_is_still() {
        let mut tracker = MotionTracker::new();
        tracker.is_still(&frame(0), &result_with_faces(&[100.0]));
        assert!(tracker.is_still(&frame(1), &result_with_faces(&[100.0])));
    }

    #[test]
    fn test_face_count_change_is_motion() {
        let mut tracker = MotionTracker::new();
        tracker.is_still(&frame(0), &result_with_faces(&[100.0]));
        assert!(!tracker.is_still(&frame(1), &result_with_faces(&[100.0, 200.0])));
    }

    #[test]
    fn test_displacement_over_threshold_is_motion() {
        let mut tracker = MotionTracker::new();
        tracker.is_still(&frame(0), &result_with_faces(&[100.0]));
        // 21 pixels of horizontal displacement, over the threshold of 20.
        assert!(!tracker.is_still(&frame(1), &result_with_faces(&[121.0])));
    }

    #[test]
    fn test_displacement_at_threshold_is_still() {
        let mut tracker = MotionTracker::new();
        tracker.is_still(&frame(0), &result_with_faces(&[100.0]));
        assert!(tracker.is_still(&frame(1), &result_with_faces(&[120.0])));
    }

    #[test]
    fn test_empty_face_list_is_vacuously_still() {
        let mut tracker = MotionTracker::new();
        tracker.is_still(&frame(0), &result_with_faces(&[]));
        assert!(tracker.is_still(&frame(1), &result_with_faces(&[])));
    }

    #[test]
    fn test_snapshot_advances_on_motion_paths() {
        let mut tracker = MotionTracker::new();
        tracker.is_still(&frame(0), &result_with_faces(&[100.0]));
        // Motion detected, but the snapshot must move to left=200...
        assert!(!tracker.is_still(&frame(1), &result_with_faces(&[200.0])));
        // ...so an identical follow-up counts as still.
        assert!(tracker.is_still(&frame(2), &result_with_faces(&[200.0])));
    }
}
