//! Data model for turning player detections into a field-relative play.

pub mod coverage;
pub mod detection;
pub mod error;
pub mod play;
pub mod position;

pub use coverage::{CoverageAnalysis, CoverageCall, CoverageLabel, Matchup};
pub use detection::{Detection, DetectionSet};
pub use error::PlayError;
pub use play::{
    AttackingDirection, BoundingBox, Coordinates, CoordinateSystem, DetectionSummary, FieldDimensions,
    FieldMetadata, LosMethod, Play, Player, ScaleMethod, TeamBalance, TeamStats,
};
pub use position::{Position, Team};
