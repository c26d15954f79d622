//! Scrimmage analysis library
//!
//! Stages that turn a detection set into a field-relative play and a
//! coverage call: duplicate suppression, team classification, line of
//! scrimmage, field scale, yard mapping and coverage classification.

pub mod classify;
pub mod config;
pub mod coverage;
pub mod dedup;
pub mod los;
pub mod mapper;
pub mod pipeline;
pub mod scale;

// Re-export commonly used types
pub use classify::{TeamSplit, classify_teams};
pub use config::PipelineConfig;
pub use coverage::CoverageClassifier;
pub use los::{LosEstimate, estimate_line_of_scrimmage};
pub use pipeline::{AnalyzedPlay, PlayAnalyzer, PlayOutcome, analyze_batch};
pub use scale::{FieldCalibration, calibrate};

// Error handling for I/O and serialization
pub type Result<T> = anyhow::Result<T>;
