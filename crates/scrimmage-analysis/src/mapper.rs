//! Pixel to yard coordinate mapping

use crate::classify::TeamSplit;
use crate::config::MappingConfig;
use crate::los::LosEstimate;
use crate::scale::FieldCalibration;
use scrimmage_core::{
    AttackingDirection, BoundingBox, Coordinates, CoordinateSystem, DetectionSummary, FieldDimensions,
    FieldMetadata, Play, PlayError, Player, TeamStats,
};
use tracing::debug;

/// Round to `places` decimals, folding `-0.0` into `0.0`
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor + 0.0
}

/// Build the play from the team split, line and scale.
///
/// Fails instead of guessing when the line is missing or the scale is not a
/// positive finite number.
pub fn map_play(
    split: &TeamSplit<'_>,
    los: Option<&LosEstimate>,
    calibration: &FieldCalibration,
    detections: DetectionSummary,
    config: &MappingConfig,
) -> Result<Play, PlayError> {
    let los = los.ok_or(PlayError::UndefinedLineOfScrimmage)?;
    let pixels_per_yard = calibration.pixels_per_yard;
    if !(pixels_per_yard.is_finite() && pixels_per_yard > 0.0) {
        return Err(PlayError::DegenerateScale { pixels_per_yard });
    }

    let direction = split
        .attacking_direction(Some(los.pixel_x))
        .unwrap_or(AttackingDirection::Right);
    let to_yards = |pixels: f64| round_to(pixels / pixels_per_yard, config.precision);

    let players: Vec<Player> = split
        .assignments()
        .iter()
        .map(|&(detection, team)| Player {
            detection_id: detection.id.clone(),
            position: detection.position.clone(),
            team,
            coordinates: Coordinates {
                x_yards: to_yards(direction.sign() * (detection.x - los.pixel_x)),
                y_yards: to_yards(detection.y - calibration.field_center_y),
                original_pixel_x: detection.x,
                original_pixel_y: detection.y,
            },
            confidence: detection.confidence,
            bounding_box: BoundingBox {
                width_pixels: detection.width,
                height_pixels: detection.height,
                width_yards: to_yards(detection.width),
                height_yards: to_yards(detection.height),
            },
        })
        .collect();

    let team_stats = TeamStats::from_players(&players, config.balance_tolerance);
    debug!(
        players = players.len(),
        offense = team_stats.offense_count,
        defense = team_stats.defense_count,
        ?direction,
        "mapped players to yard coordinates"
    );

    let metadata = FieldMetadata {
        coordinate_system: CoordinateSystem::yards(calibration.width_yards),
        field_dimensions: FieldDimensions {
            width_yards: calibration.width_yards,
            length_yards: calibration.length_yards,
            pixels_per_yard,
            x_min: calibration.x_min,
            x_max: calibration.x_max,
            detected_y_min: calibration.detected_y_min,
            detected_y_max: calibration.detected_y_max,
        },
        line_of_scrimmage_pixel: los.pixel_x,
        los_method: los.method,
        field_center_y_pixel: calibration.field_center_y,
        sideline_top_pixel: calibration.sideline_top,
        sideline_bottom_pixel: calibration.sideline_bottom,
        detected_width_yards: calibration.detected_width_yards,
        attacking_direction: direction,
        scale_method: calibration.method,
        backfield_calibrated: calibration.backfield_calibrated(),
        detections,
    };

    Ok(Play {
        metadata,
        players,
        team_stats,
    })
}
