//! SnapReady Scene Model
//!
//! Core data model shared by the gating pipeline and the analysis engine:
//! - Face geometry, landmarks, and per-face attributes
//! - Emotion score vectors
//! - Analysis results and upstream failure signals
//! - Camera frames
//! - The JSONL replay-session format for offline simulation

pub mod face;
pub mod failure;
pub mod frame;
pub mod replay;
pub mod result;
pub mod scores;

pub use face::{EyeLandmarks, Face, FaceAttributes, FaceBox, Point};
pub use failure::{AnalysisFailure, ApiKind, FailureKind};
pub use frame::{Frame, FrameImage};
pub use replay::{parse_replay, serialize_replay, ReplayEvent, ReplayKind};
pub use result::AnalysisResult;
pub use scores::EmotionScores;
