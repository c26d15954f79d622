//! High-level analysis pipeline

pub mod analyzer;
pub mod batch;

pub use analyzer::{AnalyzedPlay, PlayAnalyzer};
pub use batch::{PlayOutcome, analyze_batch};
