//! Pipeline configuration
//!
//! Every stage threshold lives here so a play can be re-analyzed with
//! different tuning without touching code. Missing keys in a JSON file fall
//! back to the defaults below.

use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// NFL field width between sidelines
pub const NFL_FIELD_WIDTH_YARDS: f64 = 53.3;

/// Main pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub dedup: DedupConfig,
    pub los: LosConfig,
    pub scale: ScaleConfig,
    pub mapping: MappingConfig,
    pub coverage: CoverageConfig,
}

/// Duplicate detection suppression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    pub enabled: bool,
    /// Max center distance on each axis for two boxes to be the same player
    pub threshold_pixels: f64,
}

/// Line-of-scrimmage search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LosConfig {
    pub min_players: usize,
    /// Best split score above which the median-offset tier runs
    pub max_balance_score: usize,
    /// Fixed pixel offsets tried around the median x.
    ///
    /// These are raw pixels, not yards: they do not follow the field scale
    /// because the scale is derived from the LOS afterwards.
    pub median_offsets_pixels: Vec<f64>,
}

/// Pixels-per-yard calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Offensive players required before the backfield is used as a yardstick
    pub min_backfield_players: usize,
    /// Assumed backfield depth range in yards, (min, max)
    pub backfield_yards_range: (f64, f64),
    /// Rough pixels-per-yard used to pick a depth inside the range
    pub backfield_pixels_per_yard_guess: f64,
    /// Assumed horizontal player spread in yards, (min, max)
    pub spread_yards_range: (f64, f64),
    pub spread_pixels_per_yard_guess: f64,
    pub field_width_yards: f64,
}

/// Pixel to yard mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Decimal places kept on yard values
    pub precision: i32,
    /// Max offense/defense count difference still reported as balanced
    pub balance_tolerance: usize,
}

/// Which defenders may be claimed by the man-matching pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPool {
    /// Safeties and corners only
    Secondary,
    /// Every defender, front seven included
    AllDefenders,
}

/// Coverage classifier thresholds, all in yards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    pub match_pool: MatchPool,
    /// Max lateral offset between receiver and defender for a man match
    pub alignment_y_diff: f64,
    /// Max defender depth for a man match
    pub man_depth_cutoff: f64,
    /// Unmatched defenders deeper than this are deep safeties
    pub deep_safety_min: f64,
    /// Corners deeper than this count as deep corners
    pub deep_corner_min: f64,
    /// Two-high shells with at most this many zone signals read as Cover 2
    pub cover2_zone_max_signals: usize,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_pixels: 1.0,
        }
    }
}

impl Default for LosConfig {
    fn default() -> Self {
        Self {
            min_players: 4,
            max_balance_score: 6,
            median_offsets_pixels: vec![-50.0, -25.0, 0.0, 25.0, 50.0],
        }
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            min_backfield_players: 3,
            backfield_yards_range: (3.0, 5.0),
            backfield_pixels_per_yard_guess: 40.0,
            spread_yards_range: (25.0, 40.0),
            spread_pixels_per_yard_guess: 20.0,
            field_width_yards: NFL_FIELD_WIDTH_YARDS,
        }
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            balance_tolerance: 3,
        }
    }
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            match_pool: MatchPool::Secondary,
            alignment_y_diff: 1.0,
            man_depth_cutoff: 7.0,
            deep_safety_min: 7.0,
            deep_corner_min: 5.0,
            cover2_zone_max_signals: 2,
        }
    }
}

impl PipelineConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        serde_json::from_str(&text).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }
}
