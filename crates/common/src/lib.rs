//! SnapReady Common Utilities
//!
//! Shared infrastructure for all SnapReady crates:
//! - Error types and result aliases
//! - Analysis cadence and auto-stop timing
//! - Tracing/logging initialization
//! - Configuration loading

pub mod cadence;
pub mod config;
pub mod error;
pub mod logging;

pub use cadence::*;
pub use config::*;
pub use error::*;
