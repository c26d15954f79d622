//! Coverage call result types

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named defensive scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoverageLabel {
    #[serde(rename = "Cover 0 Man")]
    Cover0Man,
    #[serde(rename = "Cover 1 (Man Free)")]
    Cover1ManFree,
    #[serde(rename = "Cover 2 Man")]
    Cover2Man,
    #[serde(rename = "Cover 2 Zone")]
    Cover2Zone,
    #[serde(rename = "Cover 3 Man")]
    Cover3Man,
    #[serde(rename = "Cover 3 Zone")]
    Cover3Zone,
    #[serde(rename = "Cover 4 Zone")]
    Cover4Zone,
    #[serde(rename = "Prevent")]
    Prevent,
    /// Placeholder for labels this build does not recognize
    #[default]
    #[serde(rename = "Unknown", other)]
    Unknown,
}

impl CoverageLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageLabel::Cover0Man => "Cover 0 Man",
            CoverageLabel::Cover1ManFree => "Cover 1 (Man Free)",
            CoverageLabel::Cover2Man => "Cover 2 Man",
            CoverageLabel::Cover2Zone => "Cover 2 Zone",
            CoverageLabel::Cover3Man => "Cover 3 Man",
            CoverageLabel::Cover3Zone => "Cover 3 Zone",
            CoverageLabel::Cover4Zone => "Cover 4 Zone",
            CoverageLabel::Prevent => "Prevent",
            CoverageLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CoverageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One receiver claimed by one defender in the man-matching pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub receiver_id: String,
    pub receiver_position: Position,
    pub defender_id: String,
    pub defender_position: Position,
    pub distance_yards: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageAnalysis {
    pub deep_safeties: usize,
    pub deep_corners: usize,
    pub man_signals: usize,
    pub zone_signals: usize,
    pub avg_lb_depth: f64,
    #[serde(default)]
    pub matchups: Vec<Matchup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageCall {
    pub coverage_call: CoverageLabel,
    pub analysis: CoverageAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_strings() {
        let json = serde_json::to_string(&CoverageLabel::Cover1ManFree).unwrap();
        assert_eq!(json, "\"Cover 1 (Man Free)\"");
        assert_eq!(CoverageLabel::Cover4Zone.to_string(), "Cover 4 Zone");
    }

    #[test]
    fn test_unrecognized_label_reads_as_unknown() {
        let label: CoverageLabel = serde_json::from_str("\"Tampa 2\"").unwrap();
        assert_eq!(label, CoverageLabel::Unknown);

        let label: CoverageLabel = serde_json::from_str("\"Prevent\"").unwrap();
        assert_eq!(label, CoverageLabel::Prevent);
    }
}
