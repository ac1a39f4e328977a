//! Replay-session format for offline simulation.
//!
//! A recorded session is append-only JSONL: an optional `#`-prefixed header
//! comment, then one event per line. Events carry the analysis outcome for
//! a frame together with that frame's local detections, which is everything
//! the gating pipeline consumes — pixel data is not recorded.

use serde::{Deserialize, Serialize};

use crate::face::FaceBox;
use crate::failure::{AnalysisFailure, ApiKind, FailureKind};
use crate::frame::{Frame, FrameImage};
use crate::result::AnalysisResult;

/// One recorded analysis delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayEvent {
    /// Index of the frame the analysis was computed for.
    #[serde(rename = "frame")]
    pub frame_index: u64,

    /// The event payload.
    #[serde(flatten)]
    pub kind: ReplayKind,
}

/// Discriminated union of replay event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayKind {
    /// A completed analysis result.
    Result {
        /// Local detector output on the frame the result was delivered
        /// against, used for geometry reconciliation.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        local_faces: Option<Vec<FaceBox>>,

        /// The remote analysis result.
        analysis: AnalysisResult,
    },

    /// A failed analysis call.
    Failure {
        /// Which API failed.
        api: ApiKind,

        /// Timeout versus service error.
        kind: FailureKind,

        /// Error message from the service.
        #[serde(default)]
        message: String,
    },
}

impl ReplayEvent {
    /// A successful delivery.
    pub fn result(
        frame_index: u64,
        local_faces: Option<Vec<FaceBox>>,
        analysis: AnalysisResult,
    ) -> Self {
        Self {
            frame_index,
            kind: ReplayKind::Result {
                local_faces,
                analysis,
            },
        }
    }

    /// A failed delivery.
    pub fn failure(
        frame_index: u64,
        api: ApiKind,
        kind: FailureKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            frame_index,
            kind: ReplayKind::Failure {
                api,
                kind,
                message: message.into(),
            },
        }
    }

    /// Reconstruct the (frame, outcome) pair this event recorded.
    ///
    /// Pixels are not part of the recording, so the frame carries an empty
    /// image — everything the gate consumes is present.
    pub fn into_delivery(self) -> (Frame, Result<AnalysisResult, AnalysisFailure>) {
        let mut frame = Frame::new(FrameImage::new(vec![], 0, 0), self.frame_index);
        match self.kind {
            ReplayKind::Result {
                local_faces,
                analysis,
            } => {
                if let Some(faces) = local_faces {
                    frame = frame.with_local_faces(faces);
                }
                (frame, Ok(analysis))
            }
            ReplayKind::Failure { api, kind, message } => (
                frame,
                Err(AnalysisFailure {
                    api,
                    kind,
                    message,
                    frame_index: self.frame_index,
                }),
            ),
        }
    }
}

/// Parse events from JSONL content (one JSON object per line).
pub fn parse_replay(jsonl: &str) -> Result<Vec<ReplayEvent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize events to JSONL format.
pub fn serialize_replay(events: &[ReplayEvent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}
