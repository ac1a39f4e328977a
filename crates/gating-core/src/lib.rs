//! SnapReady Gating Core — The Readiness Gate
//!
//! Decides, frame by frame, whether the scene is ready for a photo:
//! - **Emotion:** Pick the dominant emotion from per-face score vectors
//! - **Reconcile:** Overwrite stale remote face geometry with fresh local detections
//! - **Motion:** Track frame-to-frame face movement to gate out blur
//! - **Gate:** Run the ordered acceptance checks and produce one verdict per frame
//!
//! This crate is pure computation — no I/O, no network, no blocking.
//! All inputs are data; all outputs are data.

pub mod emotion;
pub mod gate;
pub mod motion;
pub mod reconcile;

pub use emotion::{dominant_emotion, summarize_emotion};
pub use gate::{GatingPipeline, IndicatorColor, Verdict};
pub use motion::MotionTracker;
pub use reconcile::reconcile_face_rects;
