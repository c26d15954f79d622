//! Many plays at once
//!
//! Plays share nothing, so with the `parallel` feature each one runs on the
//! rayon pool with no coordination. A failed play only fails its own outcome.

use super::analyzer::{AnalyzedPlay, PlayAnalyzer};
use scrimmage_core::{DetectionSet, PlayError};
use tracing::warn;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result for one named play in a batch
#[derive(Debug, Clone)]
pub struct PlayOutcome {
    pub name: String,
    pub result: Result<AnalyzedPlay, PlayError>,
}

impl PlayOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

fn analyze_one(analyzer: &PlayAnalyzer, name: &str, detections: &DetectionSet) -> PlayOutcome {
    let result = analyzer.analyze(detections);
    if let Err(err) = &result {
        warn!(play = name, error = %err, "skipping play");
    }
    PlayOutcome {
        name: name.to_string(),
        result,
    }
}

/// Analyze every `(name, detections)` pair. Output order matches input order.
pub fn analyze_batch(analyzer: &PlayAnalyzer, plays: &[(String, DetectionSet)]) -> Vec<PlayOutcome> {
    #[cfg(feature = "parallel")]
    let outcomes = plays
        .par_iter()
        .map(|(name, detections)| analyze_one(analyzer, name, detections))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes = plays
        .iter()
        .map(|(name, detections)| analyze_one(analyzer, name, detections))
        .collect();

    outcomes
}
