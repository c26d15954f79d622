//! Raw detections as delivered by the object-detection service

pub mod data;

pub use data::DetectionSet;

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// One bounding-box observation in pixel space.
///
/// `x`/`y` are the box center, not its corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub confidence: f64,
    #[serde(rename = "class")]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<u32>,
    #[serde(alias = "detection_id")]
    pub id: String,
}

impl Detection {
    /// Create a detection with an empty box
    pub fn new(id: impl Into<String>, position: impl Into<Position>, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: 0.0,
            height: 0.0,
            confidence: 1.0,
            position: position.into(),
            class_id: None,
            id: id.into(),
        }
    }

    /// Set box size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set confidence score
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn is_player(&self) -> bool {
        self.position.is_player()
    }

    /// True when both centers are within `threshold` pixels on each axis
    pub fn is_near(&self, other: &Detection, threshold: f64) -> bool {
        (self.x - other.x).abs() <= threshold && (self.y - other.y).abs() <= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service_record() {
        let json = r#"{"x": 907.5, "y": 252, "width": 45, "height": 74, "confidence": 0.911,
            "class": "LB", "class_id": 5, "detection_id": "ec7cfd37"}"#;
        let detection: Detection = serde_json::from_str(json).unwrap();

        assert_eq!(detection.position, Position::LB);
        assert_eq!(detection.id, "ec7cfd37");
        assert_eq!(detection.class_id, Some(5));
        assert_eq!((detection.width, detection.height), (45.0, 74.0));
    }

    #[test]
    fn test_is_near() {
        let a = Detection::new("a", "WR", 100.0, 200.0);
        let b = Detection::new("b", "WR", 100.8, 199.5);
        let c = Detection::new("c", "WR", 102.0, 200.0);

        assert!(a.is_near(&b, 1.0));
        assert!(!a.is_near(&c, 1.0));
    }
}
