//! Field-relative play model
//!
//! Built once per detection set by the coordinate mapper and read-only from
//! then on. Yard coordinates put the line of scrimmage at `x = 0` with
//! positive x in the offense's attacking direction, and the field center at
//! `y = 0`.

use crate::position::{Position, Team};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Horizontal pixel direction the offense is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackingDirection {
    /// Toward increasing pixel x
    Right,
    /// Toward decreasing pixel x
    Left,
}

impl AttackingDirection {
    /// Multiplier turning a pixel offset into an attacking-direction offset
    pub fn sign(self) -> f64 {
        match self {
            AttackingDirection::Right => 1.0,
            AttackingDirection::Left => -1.0,
        }
    }
}

/// Which search tier produced the line of scrimmage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LosMethod {
    BalancedSplit,
    MedianOffset,
    SortedIndex,
}

/// How pixels-per-yard was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMethod {
    /// Offensive backfield depth used as a yardstick
    Backfield,
    /// Horizontal player spread heuristic
    Spread,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x_yards: f64,
    pub y_yards: f64,
    pub original_pixel_x: f64,
    pub original_pixel_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width_pixels: f64,
    pub height_pixels: f64,
    pub width_yards: f64,
    pub height_yards: f64,
}

/// A detection placed on the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub detection_id: String,
    pub position: Position,
    pub team: Team,
    pub coordinates: Coordinates,
    pub confidence: f64,
    pub bounding_box: BoundingBox,
}

impl Player {
    /// Euclidean distance in yards
    pub fn distance_to(&self, other: &Player) -> f64 {
        let dx = self.coordinates.x_yards - other.coordinates.x_yards;
        let dy = self.coordinates.y_yards - other.coordinates.y_yards;
        (dx * dx + dy * dy).sqrt()
    }

    /// Absolute distance from the line of scrimmage in yards
    pub fn depth(&self) -> f64 {
        self.coordinates.x_yards.abs()
    }

    /// Lateral offset from another player in yards
    pub fn lateral_offset(&self, other: &Player) -> f64 {
        (self.coordinates.y_yards - other.coordinates.y_yards).abs()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    pub x_axis: String,
    pub y_axis: String,
    pub units: String,
}

impl CoordinateSystem {
    pub fn yards(field_width_yards: f64) -> Self {
        Self {
            x_axis: "Line of scrimmage at x=0, offensive direction is positive".to_string(),
            y_axis: format!(
                "Field center at y=0, sidelines at ±{:.2} yards",
                field_width_yards / 2.0
            ),
            units: "yards".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDimensions {
    pub width_yards: f64,
    pub length_yards: f64,
    pub pixels_per_yard: f64,
    /// Detection extents in pixels, referees included
    pub x_min: f64,
    pub x_max: f64,
    pub detected_y_min: f64,
    pub detected_y_max: f64,
}

/// Counts describing the detection set a play was built from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionSummary {
    pub total: usize,
    pub players: usize,
    pub referees: usize,
    pub suppressed_duplicates: usize,
    pub mean_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub coordinate_system: CoordinateSystem,
    pub field_dimensions: FieldDimensions,
    pub line_of_scrimmage_pixel: f64,
    pub los_method: LosMethod,
    pub field_center_y_pixel: f64,
    pub sideline_top_pixel: f64,
    pub sideline_bottom_pixel: f64,
    pub detected_width_yards: f64,
    pub attacking_direction: AttackingDirection,
    pub scale_method: ScaleMethod,
    pub backfield_calibrated: bool,
    pub detections: DetectionSummary,
}

/// Coarse offense/defense count balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamBalance {
    Balanced,
    SomewhatUnbalanced,
    VeryUnbalanced,
}

impl TeamBalance {
    pub fn from_difference(difference: usize, tolerance: usize) -> Self {
        if difference <= tolerance {
            TeamBalance::Balanced
        } else if difference <= tolerance * 2 {
            TeamBalance::SomewhatUnbalanced
        } else {
            TeamBalance::VeryUnbalanced
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub total_players: usize,
    pub offense_count: usize,
    pub defense_count: usize,
    pub balanced: bool,
    pub balance: TeamBalance,
    pub offensive_positions: BTreeMap<String, usize>,
    pub defensive_positions: BTreeMap<String, usize>,
}

impl TeamStats {
    pub fn from_players(players: &[Player], balance_tolerance: usize) -> Self {
        let mut offensive_positions = BTreeMap::new();
        let mut defensive_positions = BTreeMap::new();

        for player in players {
            let counts = match player.team {
                Team::Offense => &mut offensive_positions,
                Team::Defense => &mut defensive_positions,
            };
            *counts.entry(player.position.label().to_string()).or_insert(0) += 1;
        }

        let offense_count = offensive_positions.values().sum::<usize>();
        let defense_count = defensive_positions.values().sum::<usize>();
        let balance = TeamBalance::from_difference(offense_count.abs_diff(defense_count), balance_tolerance);

        Self {
            total_players: players.len(),
            offense_count,
            defense_count,
            balanced: balance == TeamBalance::Balanced,
            balance,
            offensive_positions,
            defensive_positions,
        }
    }
}

/// Mapped play: every player-class detection in yard space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub metadata: FieldMetadata,
    pub players: Vec<Player>,
    pub team_stats: TeamStats,
}

impl Play {
    pub fn offense(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().filter(|p| p.team == Team::Offense)
    }

    pub fn defense(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().filter(|p| p.team == Team::Defense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, position: &str, team: Team, x: f64, y: f64) -> Player {
        Player {
            detection_id: id.to_string(),
            position: Position::from_label(position),
            team,
            coordinates: Coordinates {
                x_yards: x,
                y_yards: y,
                original_pixel_x: 0.0,
                original_pixel_y: 0.0,
            },
            confidence: 0.9,
            bounding_box: BoundingBox {
                width_pixels: 0.0,
                height_pixels: 0.0,
                width_yards: 0.0,
                height_yards: 0.0,
            },
        }
    }

    #[test]
    fn test_distance_and_depth() {
        let wr = player("a", "WR", Team::Offense, -1.0, 10.0);
        let cb = player("b", "CB", Team::Defense, 2.0, 14.0);

        assert!((wr.distance_to(&cb) - 5.0).abs() < 1e-9);
        assert!((cb.depth() - 2.0).abs() < 1e-9);
        assert!((wr.lateral_offset(&cb) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_team_stats() {
        let players = vec![
            player("1", "WR", Team::Offense, -1.0, 0.0),
            player("2", "WR", Team::Offense, -1.0, 5.0),
            player("3", "QB", Team::Offense, -5.0, 0.0),
            player("4", "CB", Team::Defense, 3.0, 0.0),
        ];
        let stats = TeamStats::from_players(&players, 3);

        assert_eq!(stats.total_players, 4);
        assert_eq!(stats.offense_count, 3);
        assert_eq!(stats.defense_count, 1);
        assert!(stats.balanced);
        assert_eq!(stats.offensive_positions["WR"], 2);
        assert_eq!(stats.defensive_positions["CB"], 1);
    }

    #[test]
    fn test_balance_bands() {
        assert_eq!(TeamBalance::from_difference(3, 3), TeamBalance::Balanced);
        assert_eq!(TeamBalance::from_difference(6, 3), TeamBalance::SomewhatUnbalanced);
        assert_eq!(TeamBalance::from_difference(7, 3), TeamBalance::VeryUnbalanced);
    }
}
