//! Field scale calibration
//!
//! Pixels-per-yard comes from the offensive backfield when possible: the
//! horizontal span of the offense is assumed to be a 3-5 yard shotgun depth.
//! Otherwise the horizontal player spread is assumed to cover 25-40 yards.

use crate::classify::TeamSplit;
use crate::config::ScaleConfig;
use scrimmage_core::{AttackingDirection, Detection, PlayError, ScaleMethod};
use serde::Serialize;
use tracing::{debug, warn};

/// Pixel extents and the derived yard scale for one play
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCalibration {
    pub pixels_per_yard: f64,
    pub method: ScaleMethod,
    /// Sideline-to-sideline width in yards and in pixels at this scale
    pub width_yards: f64,
    pub width_pixels: f64,
    /// Vertical detection spread
    pub length_pixels: f64,
    pub length_yards: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub detected_y_min: f64,
    pub detected_y_max: f64,
    pub detected_width_yards: f64,
    pub field_center_y: f64,
    pub sideline_top: f64,
    pub sideline_bottom: f64,
}

impl FieldCalibration {
    pub fn backfield_calibrated(&self) -> bool {
        self.method == ScaleMethod::Backfield
    }
}

struct Extents {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Extents {
    fn of(detections: &[Detection]) -> Option<Self> {
        let first = detections.first()?;
        let mut extents = Extents {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for detection in &detections[1..] {
            extents.x_min = extents.x_min.min(detection.x);
            extents.x_max = extents.x_max.max(detection.x);
            extents.y_min = extents.y_min.min(detection.y);
            extents.y_max = extents.y_max.max(detection.y);
        }
        Some(extents)
    }
}

fn is_valid_scale(pixels_per_yard: f64) -> bool {
    pixels_per_yard.is_finite() && pixels_per_yard > 0.0
}

/// Scale from the offensive backfield span, `None` when it cannot be used
fn backfield_scale(split: &TeamSplit<'_>, los: Option<f64>, config: &ScaleConfig) -> Option<f64> {
    let line = los?;
    let xs: Vec<f64> = split.offense().map(|d| d.x).collect();
    if xs.len() < config.min_backfield_players {
        return None;
    }

    let leftmost = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let rightmost = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (closest, furthest) = match split.attacking_direction(Some(line))? {
        AttackingDirection::Right => (rightmost, leftmost),
        AttackingDirection::Left => (leftmost, rightmost),
    };

    let span = (furthest - closest).abs();
    let (min_yards, max_yards) = config.backfield_yards_range;
    let depth_yards = (span / config.backfield_pixels_per_yard_guess).max(min_yards).min(max_yards);
    let pixels_per_yard = span / depth_yards;

    if !is_valid_scale(pixels_per_yard) {
        warn!(span, "offensive backfield has no depth, cannot calibrate from it");
        return None;
    }

    debug!(
        closest,
        furthest,
        span,
        depth_yards,
        pixels_per_yard,
        "calibrated scale from backfield depth"
    );
    Some(pixels_per_yard)
}

/// Derive pixels-per-yard and field extents.
///
/// `detections` is every detection in the play, referees included; `split`
/// holds the player team assignment made against `los`.
pub fn calibrate(
    detections: &[Detection],
    los: Option<f64>,
    split: &TeamSplit<'_>,
    config: &ScaleConfig,
) -> Result<FieldCalibration, PlayError> {
    let extents = Extents::of(detections).ok_or(PlayError::DegenerateScale { pixels_per_yard: 0.0 })?;
    let spread_pixels = extents.x_max - extents.x_min;
    let length_pixels = extents.y_max - extents.y_min;

    let (pixels_per_yard, method) = match backfield_scale(split, los, config) {
        Some(scale) => (scale, ScaleMethod::Backfield),
        None => {
            let (min_yards, max_yards) = config.spread_yards_range;
            let spread_yards = (spread_pixels / config.spread_pixels_per_yard_guess).max(min_yards).min(max_yards);
            let scale = spread_pixels / spread_yards;
            warn!(spread_pixels, spread_yards, pixels_per_yard = scale, "using player spread for field scale");
            (scale, ScaleMethod::Spread)
        }
    };

    if !is_valid_scale(pixels_per_yard) {
        return Err(PlayError::DegenerateScale { pixels_per_yard });
    }

    let width_pixels = config.field_width_yards * pixels_per_yard;
    let field_center_y = (extents.y_min + extents.y_max) / 2.0;

    Ok(FieldCalibration {
        pixels_per_yard,
        method,
        width_yards: config.field_width_yards,
        width_pixels,
        length_pixels,
        length_yards: length_pixels / pixels_per_yard,
        x_min: extents.x_min,
        x_max: extents.x_max,
        detected_y_min: extents.y_min,
        detected_y_max: extents.y_max,
        detected_width_yards: spread_pixels / pixels_per_yard,
        field_center_y,
        sideline_top: field_center_y - width_pixels / 2.0,
        sideline_bottom: field_center_y + width_pixels / 2.0,
    })
}
