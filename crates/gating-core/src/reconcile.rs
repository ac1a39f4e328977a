//! Face-rectangle reconciliation.
//!
//! Remote analysis is slow: by the time a result arrives, the frame on
//! screen is newer than the frame the result was computed on. When a local
//! (fast, current-frame) detector is running, its boxes describe where the
//! faces are *now*, so the stale remote geometry is overwritten with them
//! before display and gating.

use std::cmp::Ordering;

use snapready_scene_model::{Face, FaceBox};

/// Overwrite the geometry of `result_faces` with `local_boxes`, matching
/// faces by left-to-right horizontal order.
///
/// Both sides are sorted by horizontal center and paired positionally up to
/// the shorter length. Only box coordinates change; attributes, landmarks,
/// and any parallel score sequences are untouched, and the face count never
/// changes. Excess faces on the longer side keep their stale geometry.
///
/// The heuristic assumes the face count is stable between the two frames
/// and that horizontal ordering is a faithful identity proxy. It silently
/// mis-assigns identities when faces cross paths horizontally or when the
/// counts differ.
pub fn reconcile_face_rects(result_faces: &mut [Face], local_boxes: &[FaceBox]) {
    let mut order: Vec<usize> = (0..result_faces.len()).collect();
    order.sort_by(|&a, &b| {
        compare_centers(
            result_faces[a].rect.horizontal_center(),
            result_faces[b].rect.horizontal_center(),
        )
    });

    let mut sorted_local = local_boxes.to_vec();
    sorted_local.sort_by(|a, b| compare_centers(a.horizontal_center(), b.horizontal_center()));

    for (&slot, local) in order.iter().zip(sorted_local.iter()) {
        result_faces[slot].rect = *local;
    }
}

fn compare_centers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
