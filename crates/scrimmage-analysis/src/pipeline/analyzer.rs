//! End-to-end play analyzer

use crate::Result;
use crate::classify::classify_teams;
use crate::config::PipelineConfig;
use crate::coverage::CoverageClassifier;
use crate::dedup::suppress_duplicates;
use crate::los::estimate_line_of_scrimmage;
use crate::mapper::{map_play, round_to};
use crate::scale::calibrate;
use anyhow::Context;
use scrimmage_core::{CoverageCall, Detection, DetectionSet, DetectionSummary, Play, PlayError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Mapped play plus its coverage call.
///
/// Serializes with the top-level keys `metadata`, `players`, `team_stats`
/// and `coverage_analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedPlay {
    #[serde(flatten)]
    pub play: Play,
    pub coverage_analysis: CoverageCall,
}

/// Runs every stage over one detection set
pub struct PlayAnalyzer {
    config: PipelineConfig,
    coverage: CoverageClassifier,
}

impl PlayAnalyzer {
    pub fn new(config: PipelineConfig) -> Self {
        let coverage = CoverageClassifier::new(config.coverage.clone());
        Self { config, coverage }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Detections after duplicate suppression, with the number removed
    fn clean(&self, detections: &DetectionSet) -> (DetectionSet, usize) {
        let predictions = detections.predictions.clone();
        let (kept, suppressed) = if self.config.dedup.enabled {
            suppress_duplicates(predictions, self.config.dedup.threshold_pixels)
        } else {
            (predictions, 0)
        };
        (DetectionSet::new(kept), suppressed)
    }

    /// Line of scrimmage, team split, scale and yard mapping
    pub fn map(&self, detections: &DetectionSet) -> std::result::Result<Play, PlayError> {
        let (cleaned, suppressed) = self.clean(detections);
        let players: Vec<&Detection> = cleaned.players().collect();

        let los = estimate_line_of_scrimmage(players.iter().copied(), &self.config.los).ok_or(
            PlayError::InsufficientPlayers {
                found: players.len(),
                required: self.config.los.min_players,
            },
        )?;

        let split = classify_teams(players.iter().copied(), Some(los.pixel_x));
        let calibration = calibrate(&cleaned.predictions, Some(los.pixel_x), &split, &self.config.scale)?;

        let summary = DetectionSummary {
            total: cleaned.len(),
            players: players.len(),
            referees: cleaned.referee_count(),
            suppressed_duplicates: suppressed,
            mean_confidence: round_to(cleaned.mean_confidence(), 3),
        };

        map_play(&split, Some(&los), &calibration, summary, &self.config.mapping)
    }

    /// Full analysis: mapped play and coverage call
    pub fn analyze(&self, detections: &DetectionSet) -> std::result::Result<AnalyzedPlay, PlayError> {
        let start_time = std::time::Instant::now();

        let play = self.map(detections)?;
        let coverage_analysis = self.coverage.classify(&play);

        info!(
            players = play.players.len(),
            offense = play.team_stats.offense_count,
            defense = play.team_stats.defense_count,
            coverage = %coverage_analysis.coverage_call,
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "play analyzed"
        );

        Ok(AnalyzedPlay {
            play,
            coverage_analysis,
        })
    }

    /// Export an analyzed play as pretty JSON
    pub fn export_json(&self, result: &AnalyzedPlay, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(result).context("Failed to serialize analyzed play")?;

        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write JSON to: {}", output_path.display()))?;

        Ok(())
    }
}

impl Default for PlayAnalyzer {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
