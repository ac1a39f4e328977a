//! Print dominant-emotion summaries for a recorded session.

use std::path::PathBuf;

use snapready_gating_core::summarize_emotion;
use snapready_scene_model::{parse_replay, ReplayKind};

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read session {path:?}: {e}"))?;
    let events =
        parse_replay(&content).map_err(|e| anyhow::anyhow!("Failed to parse session: {e}"))?;

    for event in events {
        let ReplayKind::Result { analysis, .. } = event.kind else {
            continue;
        };

        for (i, scores) in analysis.emotion_scores.iter().enumerate() {
            println!(
                "frame {:>5}  face {i}: {}",
                event.frame_index,
                summarize_emotion(scores)
            );
        }

        if let Some(tags) = &analysis.tags {
            println!("frame {:>5}  tags: {}", event.frame_index, tags.join(", "));
        }

        if let Some(names) = &analysis.celebrity_names {
            println!(
                "frame {:>5}  celebrities: {}",
                event.frame_index,
                names.join(", ")
            );
        }
    }

    Ok(())
}
