//! Replay a recorded session through the gating pipeline.

use std::path::PathBuf;

use snapready_gating_core::{GatingPipeline, IndicatorColor};
use snapready_scene_model::parse_replay;

pub fn run(path: PathBuf, accepted_only: bool) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read session {path:?}: {e}"))?;
    let events =
        parse_replay(&content).map_err(|e| anyhow::anyhow!("Failed to parse session: {e}"))?;

    tracing::debug!(events = events.len(), "Session loaded");

    let mut pipeline = GatingPipeline::new();
    let mut accepted = 0usize;
    let mut rejected = 0usize;

    for event in events {
        let (frame, outcome) = event.into_delivery();
        let failed_upstream = outcome.is_err();
        let verdict = pipeline.process_delivery(&frame, &outcome);

        if verdict.accepted {
            accepted += 1;
        } else {
            rejected += 1;
        }

        if accepted_only && !verdict.accepted {
            continue;
        }

        let marker = match verdict.indicator {
            IndicatorColor::Green => "READY",
            IndicatorColor::Red if failed_upstream => "ERROR",
            IndicatorColor::Red => "WAIT",
        };
        println!("frame {:>5}  [{marker:>5}]  {}", frame.index, verdict.message);
    }

    println!();
    println!("{accepted} frame(s) accepted, {rejected} rejected");

    Ok(())
}
