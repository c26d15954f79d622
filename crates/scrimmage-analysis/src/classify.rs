//! Offense/defense assignment

use scrimmage_core::{AttackingDirection, Detection, Team};

/// Team for one detection.
///
/// Position codes decide first. Labels outside both code sets use the side
/// of the line of scrimmage (`x < los` is offense). Without a line they
/// default to defense.
pub fn team_for(detection: &Detection, los: Option<f64>) -> Team {
    if let Some(team) = detection.position.known_team() {
        return team;
    }

    match los {
        Some(line) if detection.x < line => Team::Offense,
        Some(_) => Team::Defense,
        // TODO: check the defense default against labeled legacy plays; it
        // is asymmetric and may be an artifact of the first heuristic.
        None => Team::Defense,
    }
}

/// Detections paired with their assigned team, in input order
#[derive(Debug, Clone)]
pub struct TeamSplit<'a> {
    assignments: Vec<(&'a Detection, Team)>,
}

impl<'a> TeamSplit<'a> {
    pub fn assignments(&self) -> &[(&'a Detection, Team)] {
        &self.assignments
    }

    pub fn offense(&self) -> impl Iterator<Item = &'a Detection> + '_ {
        self.members(Team::Offense)
    }

    pub fn defense(&self) -> impl Iterator<Item = &'a Detection> + '_ {
        self.members(Team::Defense)
    }

    pub fn offense_count(&self) -> usize {
        self.offense().count()
    }

    pub fn defense_count(&self) -> usize {
        self.defense().count()
    }

    fn members(&self, team: Team) -> impl Iterator<Item = &'a Detection> + '_ {
        self.assignments
            .iter()
            .filter(move |(_, assigned)| *assigned == team)
            .map(|(detection, _)| *detection)
    }

    /// Direction the offense is moving, from its mean x relative to the line.
    ///
    /// `None` without a line or without offensive players.
    pub fn attacking_direction(&self, los: Option<f64>) -> Option<AttackingDirection> {
        let line = los?;
        let xs: Vec<f64> = self.offense().map(|d| d.x).collect();
        if xs.is_empty() {
            return None;
        }

        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        if line > mean {
            Some(AttackingDirection::Right)
        } else {
            Some(AttackingDirection::Left)
        }
    }
}

/// Split player detections into disjoint offense and defense lists
pub fn classify_teams<'a, I>(players: I, los: Option<f64>) -> TeamSplit<'a>
where
    I: IntoIterator<Item = &'a Detection>,
{
    TeamSplit {
        assignments: players
            .into_iter()
            .map(|detection| (detection, team_for(detection, los)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_win_over_side() {
        let qb = Detection::new("qb", "QB", 900.0, 0.0);
        let cb = Detection::new("cb", "CB", 100.0, 0.0);

        assert_eq!(team_for(&qb, Some(500.0)), Team::Offense);
        assert_eq!(team_for(&cb, Some(500.0)), Team::Defense);
    }

    #[test]
    fn test_spatial_fallback() {
        let left = Detection::new("l", "player", 499.0, 0.0);
        let on_line = Detection::new("o", "WING", 500.0, 0.0);

        assert_eq!(team_for(&left, Some(500.0)), Team::Offense);
        assert_eq!(team_for(&on_line, Some(500.0)), Team::Defense);
    }

    #[test]
    fn test_unknown_without_line_defaults_to_defense() {
        let generic = Detection::new("g", "player", 10.0, 0.0);
        assert_eq!(team_for(&generic, None), Team::Defense);
    }

    #[test]
    fn test_split_is_disjoint_and_complete() {
        let detections = vec![
            Detection::new("1", "QB", 100.0, 0.0),
            Detection::new("2", "player", 200.0, 0.0),
            Detection::new("3", "player", 400.0, 0.0),
            Detection::new("4", "LB", 450.0, 0.0),
        ];
        let split = classify_teams(&detections, Some(300.0));

        assert_eq!(split.offense_count(), 2);
        assert_eq!(split.defense_count(), 2);
        assert_eq!(split.offense_count() + split.defense_count(), detections.len());
        assert_eq!(split.attacking_direction(Some(300.0)), Some(AttackingDirection::Right));
    }

    #[test]
    fn test_offense_on_right_attacks_left() {
        let detections = vec![
            Detection::new("1", "QB", 800.0, 0.0),
            Detection::new("2", "DT", 400.0, 0.0),
        ];
        let split = classify_teams(&detections, Some(600.0));

        assert_eq!(split.attacking_direction(Some(600.0)), Some(AttackingDirection::Left));
        assert_eq!(split.attacking_direction(None), None);
    }
}
