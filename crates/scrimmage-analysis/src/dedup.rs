//! Duplicate detection suppression
//!
//! The detection service sometimes reports the same player twice with
//! near-identical centers. Keep the more confident box.

use scrimmage_core::Detection;
use std::collections::HashSet;
use tracing::debug;

/// Drop detections whose center is within `threshold` pixels (on both axes)
/// of another detection with higher confidence. On equal confidence the later
/// detection goes. Input order is preserved.
pub fn suppress_duplicates(detections: Vec<Detection>, threshold: f64) -> (Vec<Detection>, usize) {
    let mut suppressed = HashSet::new();

    for i in 0..detections.len() {
        for j in (i + 1)..detections.len() {
            let (a, b) = (&detections[i], &detections[j]);
            if !a.is_near(b, threshold) {
                continue;
            }

            let loser = if a.confidence < b.confidence { i } else { j };
            if suppressed.insert(loser) {
                debug!(
                    kept = %detections[i + j - loser].id,
                    dropped = %detections[loser].id,
                    "suppressed duplicate detection"
                );
            }
        }
    }

    let removed = suppressed.len();
    let kept = detections
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !suppressed.contains(index))
        .map(|(_, detection)| detection)
        .collect();

    (kept, removed)
}
