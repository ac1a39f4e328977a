//! SnapReady Analysis Engine
//!
//! Orchestration between the camera, the remote analyzer, and the gating
//! core:
//! - **Analyzer:** The async boundary trait the remote client implements
//! - **Dispatcher:** Operating-mode to request mapping, local-face-hint
//!   forwarding, and per-API call counting
//! - **Session:** Bounded event channels feeding a single-consumer gating
//!   loop that owns all mutable gate state

pub mod analyzer;
pub mod dispatcher;
pub mod session;

pub use analyzer::RemoteAnalyzer;
pub use dispatcher::{AnalysisDispatcher, AnalysisMode, ApiCallCounters, ApiCallSnapshot};
pub use session::{AnalysisEvent, FrameVerdict, GateSession, SessionHandle, SessionStats};
