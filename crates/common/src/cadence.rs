//! Analysis cadence and session timing.
//!
//! A live camera delivers frames far faster than a remote analyzer should
//! be called. This module provides:
//! - An interval trigger that decides which frames are due for submission
//! - A session clock used to enforce the auto-stop duration

use std::time::Instant;

/// Decides whether a frame is due for remote analysis, based on a fixed
/// submission interval.
#[derive(Debug)]
pub struct AnalysisTrigger {
    interval_ns: u64,
    last_fire_ns: Option<u64>,
}

impl AnalysisTrigger {
    /// Create a trigger firing at most once per `interval_secs`.
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_ns: (interval_secs.max(0.0) * 1_000_000_000.0) as u64,
            last_fire_ns: None,
        }
    }

    /// Check whether a frame arriving at `current_ns` (monotonic
    /// nanoseconds since session start) should be submitted.
    /// The first frame is always due.
    pub fn is_due(&mut self, current_ns: u64) -> bool {
        match self.last_fire_ns {
            None => {
                self.last_fire_ns = Some(current_ns);
                true
            }
            Some(last) if current_ns >= last + self.interval_ns => {
                self.last_fire_ns = Some(current_ns);
                true
            }
            _ => false,
        }
    }

    /// Target interval in nanoseconds.
    pub fn interval_ns(&self) -> u64 {
        self.interval_ns
    }
}

/// A session clock anchored to the moment processing started.
#[derive(Debug, Clone)]
pub struct SessionClock {
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl SessionClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Nanoseconds elapsed since session start.
    pub fn elapsed_ns(&self) -> u64 {
        self.epoch.elapsed().as_nanos() as u64
    }

    /// Seconds elapsed since session start.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at session start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// Whether the auto-stop duration has elapsed.
    pub fn auto_stop_reached(&self, enabled: bool, auto_stop_secs: f64) -> bool {
        enabled && self.elapsed_secs() >= auto_stop_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_always_due() {
        let mut trigger = AnalysisTrigger::new(1.0);
        assert!(trigger.is_due(0));
    }

    #[test]
    fn test_frames_inside_interval_are_skipped() {
        let mut trigger = AnalysisTrigger::new(1.0);
        assert!(trigger.is_due(0));
        assert!(!trigger.is_due(500_000_000)); // 0.5s later, too soon
        assert!(trigger.is_due(1_000_000_000)); // exactly one interval
    }

    #[test]
    fn test_zero_interval_fires_every_frame() {
        let mut trigger = AnalysisTrigger::new(0.0);
        assert!(trigger.is_due(0));
        assert!(trigger.is_due(1));
        assert!(trigger.is_due(2));
    }

    #[test]
    fn test_session_clock_elapsed() {
        let clock = SessionClock::start();
        assert!(clock.elapsed_ns() < 1_000_000_000); // less than 1 second
        assert!(!clock.auto_stop_reached(true, 300.0));
        assert!(!clock.auto_stop_reached(false, 0.0));
    }
}
