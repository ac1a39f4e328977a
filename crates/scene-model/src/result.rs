//! Completed remote analysis results.

use serde::{Deserialize, Serialize};

use crate::face::Face;
use crate::scores::EmotionScores;

/// The outcome of one completed remote analysis call.
///
/// `faces` and `emotion_scores` are parallel sequences: when scores are
/// present at all, index `i` scores face `i`. The producing dispatcher
/// guarantees a stable, consistent order between them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected faces, in the analyzer's order.
    pub faces: Vec<Face>,

    /// Per-face emotion scores, parallel to `faces`; empty when the
    /// analysis mode does not score emotions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emotion_scores: Vec<EmotionScores>,

    /// Scene tags, for the tagging mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Celebrity names, for the celebrity mode; parallel to `faces`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celebrity_names: Option<Vec<String>>,
}

impl AnalysisResult {
    /// A result carrying faces only.
    pub fn from_faces(faces: Vec<Face>) -> Self {
        Self {
            faces,
            ..Default::default()
        }
    }

    /// Whether the faces/scores parallel-sequence invariant holds.
    pub fn is_consistent(&self) -> bool {
        self.emotion_scores.is_empty() || self.emotion_scores.len() == self.faces.len()
    }
}
