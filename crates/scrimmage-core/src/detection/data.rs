use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::detection::Detection;

/// All detections for one play image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionSet {
    pub predictions: Vec<Detection>,
}

/// Accepted file shapes: the service response or a bare list
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDetections {
    Response { predictions: Vec<Detection> },
    List(Vec<Detection>),
}

impl DetectionSet {
    pub fn new(predictions: Vec<Detection>) -> Self {
        Self { predictions }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<DetectionSet> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to open detection file: {}", path.display()))?;

        Self::from_json_str(&text)
            .with_context(|| format!("Invalid detection data in {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<DetectionSet> {
        let raw: RawDetections =
            serde_json::from_str(text).context("Expected {\"predictions\": [...]} or a list of detections")?;

        let predictions = match raw {
            RawDetections::Response { predictions } => predictions,
            RawDetections::List(predictions) => predictions,
        };
        Ok(DetectionSet { predictions })
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Detection> {
        self.predictions.iter()
    }

    /// Player-class detections, referees excluded, in input order
    pub fn players(&self) -> impl Iterator<Item = &Detection> + '_ {
        self.predictions.iter().filter(|d| d.is_player())
    }

    pub fn referee_count(&self) -> usize {
        self.predictions.iter().filter(|d| !d.is_player()).count()
    }

    pub fn mean_confidence(&self) -> f64 {
        if self.predictions.is_empty() {
            return 0.0;
        }
        self.predictions.iter().map(|d| d.confidence).sum::<f64>() / self.predictions.len() as f64
    }
}

impl FromIterator<Detection> for DetectionSet {
    fn from_iter<T: IntoIterator<Item = Detection>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for DetectionSet {
    type Item = Detection;
    type IntoIter = std::vec::IntoIter<Detection>;

    fn into_iter(self) -> Self::IntoIter {
        self.predictions.into_iter()
    }
}
