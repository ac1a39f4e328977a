//! Upstream analysis failure signals.
//!
//! The remote analyzer surfaces failures as data, not as gate errors: a
//! failed call produces one failure event, the presentation layer shows it,
//! and the next frame's event is processed normally.

use serde::{Deserialize, Serialize};

/// Which remote API produced a result or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKind {
    Face,
    Emotion,
    Vision,
}

impl ApiKind {
    /// Human-facing API name, as shown in failure messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ApiKind::Face => "Face",
            ApiKind::Emotion => "Emotion",
            ApiKind::Vision => "Computer Vision",
        }
    }
}

/// How an upstream call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The call exceeded its deadline. Not retried.
    Timeout,
    /// The remote service returned an error. Not retried.
    Api,
}

/// A failed remote analysis call, tagged with its originating API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    /// Which API the call went to.
    pub api: ApiKind,

    /// Timeout versus service error.
    pub kind: FailureKind,

    /// Error message from the service, empty for timeouts.
    pub message: String,

    /// Index of the frame the call was made for.
    pub frame_index: u64,
}

impl AnalysisFailure {
    pub fn timeout(api: ApiKind, frame_index: u64) -> Self {
        Self {
            api,
            kind: FailureKind::Timeout,
            message: String::new(),
            frame_index,
        }
    }

    pub fn api_error(api: ApiKind, frame_index: u64, message: impl Into<String>) -> Self {
        Self {
            api,
            kind: FailureKind::Api,
            message: message.into(),
            frame_index,
        }
    }
}

impl std::fmt::Display for AnalysisFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FailureKind::Timeout => write!(f, "API call timed out."),
            FailureKind::Api => write!(
                f,
                "{} API call failed on frame {}: {}",
                self.api.display_name(),
                self.frame_index,
                self.message
            ),
        }
    }
}
