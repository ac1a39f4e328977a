//! The gate session event loop.
//!
//! Frames and analysis results arrive as two independent asynchronous
//! event streams. The session runs a single consumer task that owns the
//! gating pipeline (and with it all mutable gate state) exclusively and
//! processes completed results strictly in delivery order — the motion
//! tracker's correctness depends on seeing a total order of
//! (frame, result) pairs. The presentation layer only ever receives
//! immutable verdicts.

use std::sync::Arc;

use tokio::sync::mpsc;

use snapready_common::cadence::{AnalysisTrigger, SessionClock};
use snapready_common::config::AnalysisDefaults;
use snapready_common::error::{SnapError, SnapResult};
use snapready_gating_core::{GatingPipeline, Verdict};
use snapready_scene_model::{AnalysisFailure, AnalysisResult, Frame};

use crate::dispatcher::AnalysisDispatcher;

/// One completed-or-failed analysis delivery: the frame the result is
/// being shown against plus the outcome of the remote call.
#[derive(Debug, Clone)]
pub struct AnalysisEvent {
    pub frame: Frame,
    pub outcome: Result<AnalysisResult, AnalysisFailure>,
}

/// A verdict paired with the frame it was produced for.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameVerdict {
    pub frame_index: u64,
    pub verdict: Verdict,
}

/// Counters accumulated over a session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Frames offered to the session.
    pub frames_seen: u64,

    /// Frames actually submitted for remote analysis.
    pub frames_submitted: u64,

    /// Results evaluated by the gate.
    pub results_ok: u64,

    /// Upstream failures surfaced as red verdicts.
    pub results_failed: u64,
}

impl SessionStats {
    /// Share of seen frames that were submitted, as a percentage.
    pub fn submission_rate(&self) -> f64 {
        if self.frames_seen == 0 {
            return 0.0;
        }
        self.frames_submitted as f64 / self.frames_seen as f64 * 100.0
    }
}

/// A running gate session: frame intake on one side, verdicts on the other.
///
/// The consumer must drain `verdicts`; the loop applies backpressure
/// through the bounded channel rather than dropping verdicts. Every clone
/// of the frame sender must be dropped before [`SessionHandle::finish`]
/// can complete.
pub struct SessionHandle {
    frames: mpsc::Sender<Frame>,
    pub verdicts: mpsc::Receiver<FrameVerdict>,
    task: tokio::task::JoinHandle<SessionStats>,
}

impl SessionHandle {
    /// A sender for delivering camera frames to the session.
    pub fn frames(&self) -> mpsc::Sender<Frame> {
        self.frames.clone()
    }

    /// Close frame intake, drain the remaining verdicts, and wait for the
    /// loop to wind down.
    pub async fn finish(self) -> SnapResult<(SessionStats, Vec<FrameVerdict>)> {
        let Self {
            frames,
            mut verdicts,
            task,
        } = self;
        drop(frames);

        let mut remaining = Vec::new();
        while let Some(verdict) = verdicts.recv().await {
            remaining.push(verdict);
        }

        let stats = task
            .await
            .map_err(|e| SnapError::session(format!("gate loop task failed: {e}")))?;
        Ok((stats, remaining))
    }
}

/// Configuration and collaborators for one gating session.
pub struct GateSession {
    dispatcher: Arc<AnalysisDispatcher>,
    defaults: AnalysisDefaults,
}

impl GateSession {
    pub fn new(dispatcher: Arc<AnalysisDispatcher>, defaults: AnalysisDefaults) -> Self {
        Self {
            dispatcher,
            defaults,
        }
    }

    /// Start the session loop and hand back its channel endpoints.
    pub fn spawn(self) -> SessionHandle {
        let depth = self.defaults.event_queue_depth.max(1);
        let (frame_tx, frame_rx) = mpsc::channel(depth);
        let (verdict_tx, verdict_rx) = mpsc::channel(depth);

        let task = tokio::spawn(self.run(frame_rx, verdict_tx));

        SessionHandle {
            frames: frame_tx,
            verdicts: verdict_rx,
            task,
        }
    }

    async fn run(
        self,
        mut frames: mpsc::Receiver<Frame>,
        verdicts: mpsc::Sender<FrameVerdict>,
    ) -> SessionStats {
        let mut pipeline = GatingPipeline::new();
        let mut trigger = AnalysisTrigger::new(self.defaults.interval_secs);
        let clock = SessionClock::start();
        let mut stats = SessionStats::default();

        let depth = self.defaults.event_queue_depth.max(1);
        let (analysis_tx, mut analyses) = mpsc::channel::<AnalysisEvent>(depth);
        // Dropped once frame intake ends; the loop finishes when the last
        // in-flight submission has delivered its event.
        let mut analysis_tx = Some(analysis_tx);

        tracing::info!(
            epoch_wall = clock.epoch_wall(),
            interval_secs = self.defaults.interval_secs,
            "Gate session started"
        );

        loop {
            tokio::select! {
                // Drain deliveries ahead of new frames so verdicts keep
                // delivery order under load.
                biased;

                event = analyses.recv() => {
                    match event {
                        Some(event) => {
                            match event.outcome {
                                Ok(_) => stats.results_ok += 1,
                                Err(_) => stats.results_failed += 1,
                            }
                            let verdict = pipeline.process_delivery(&event.frame, &event.outcome);
                            tracing::debug!(
                                frame = event.frame.index,
                                accepted = verdict.accepted,
                                message = %verdict.message,
                                "Frame evaluated"
                            );
                            let out = FrameVerdict {
                                frame_index: event.frame.index,
                                verdict,
                            };
                            if verdicts.send(out).await.is_err() {
                                // Presentation side went away.
                                break;
                            }
                        }
                        None => break,
                    }
                }

                frame = frames.recv(), if analysis_tx.is_some() => {
                    match frame {
                        Some(frame) => {
                            stats.frames_seen += 1;

                            if clock.auto_stop_reached(
                                self.defaults.auto_stop_enabled,
                                self.defaults.auto_stop_secs,
                            ) {
                                tracing::info!(
                                    elapsed_secs = clock.elapsed_secs(),
                                    "Auto-stop reached; closing frame intake"
                                );
                                frames.close();
                                analysis_tx = None;
                                continue;
                            }

                            if trigger.is_due(clock.elapsed_ns()) {
                                if let Some(tx) = &analysis_tx {
                                    stats.frames_submitted += 1;
                                    let dispatcher = self.dispatcher.clone();
                                    let tx = tx.clone();
                                    tokio::spawn(async move {
                                        let outcome = dispatcher.analyze(&frame).await;
                                        let _ = tx.send(AnalysisEvent { frame, outcome }).await;
                                    });
                                }
                            }
                        }
                        None => analysis_tx = None,
                    }
                }
            }
        }

        tracing::info!(
            frames_seen = stats.frames_seen,
            frames_submitted = stats.frames_submitted,
            results_ok = stats.results_ok,
            results_failed = stats.results_failed,
            submission_rate = stats.submission_rate(),
            "Gate session finished"
        );
        stats
    }
}
