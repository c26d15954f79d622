//! Defensive coverage classification
//!
//! Two passes over the mapped play, then a fixed decision table:
//!
//! 1. Man matching. Receivers are visited in play order; each claims the
//!    nearest still-unclaimed defender that is aligned with it laterally and
//!    close to the line. This is greedy, so an earlier receiver can take a
//!    defender a later one would have preferred.
//! 2. Every defender left in the pool is a zone defender when shallow and a
//!    deep safety when beyond `deep_safety_min`.

use crate::config::{CoverageConfig, MatchPool};
use crate::mapper::round_to;
use scrimmage_core::{CoverageAnalysis, CoverageCall, CoverageLabel, Matchup, Play, Player};
use tracing::debug;

/// Decision table over the deep safety count and man/zone signals
pub fn decide(deep_safeties: usize, man_signals: usize, zone_signals: usize, config: &CoverageConfig) -> CoverageLabel {
    let man_dominant = man_signals >= zone_signals;
    match deep_safeties {
        0 => CoverageLabel::Cover0Man,
        1 if man_dominant => CoverageLabel::Cover1ManFree,
        1 => CoverageLabel::Cover3Zone,
        2 if man_dominant => CoverageLabel::Cover2Man,
        2 if zone_signals <= config.cover2_zone_max_signals => CoverageLabel::Cover2Zone,
        2 => CoverageLabel::Cover4Zone,
        3 if man_dominant => CoverageLabel::Cover3Man,
        3 => CoverageLabel::Cover4Zone,
        _ => CoverageLabel::Prevent,
    }
}

pub struct CoverageClassifier {
    config: CoverageConfig,
}

impl CoverageClassifier {
    pub fn new(config: CoverageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoverageConfig {
        &self.config
    }

    fn in_pool(&self, defender: &Player) -> bool {
        match self.config.match_pool {
            MatchPool::Secondary => defender.position.is_secondary(),
            MatchPool::AllDefenders => true,
        }
    }

    fn man_candidate(&self, receiver: &Player, defender: &Player) -> bool {
        receiver.lateral_offset(defender) <= self.config.alignment_y_diff
            && defender.depth() <= self.config.man_depth_cutoff
    }

    /// Classify the coverage shown in a mapped play
    pub fn classify(&self, play: &Play) -> CoverageCall {
        let defenders: Vec<&Player> = play.defense().collect();
        let mut available: Vec<&Player> = defenders.iter().copied().filter(|d| self.in_pool(d)).collect();

        let mut matchups = Vec::new();
        for receiver in play.offense().filter(|p| p.position.is_receiver()) {
            let mut nearest: Option<(usize, f64)> = None;
            for (index, defender) in available.iter().enumerate() {
                if !self.man_candidate(receiver, defender) {
                    continue;
                }
                let distance = receiver.distance_to(defender);
                if nearest.is_none_or(|(_, best)| distance < best) {
                    nearest = Some((index, distance));
                }
            }

            let Some((index, distance)) = nearest else {
                continue;
            };
            let defender = available.remove(index);
            debug!(
                receiver = %receiver.detection_id,
                receiver_position = %receiver.position,
                defender = %defender.detection_id,
                defender_position = %defender.position,
                distance,
                "man match"
            );
            matchups.push(Matchup {
                receiver_id: receiver.detection_id.clone(),
                receiver_position: receiver.position.clone(),
                defender_id: defender.detection_id.clone(),
                defender_position: defender.position.clone(),
                distance_yards: round_to(distance, 2),
            });
        }

        let (shallow, deep): (Vec<&Player>, Vec<&Player>) = available
            .into_iter()
            .partition(|defender| defender.depth() <= self.config.deep_safety_min);

        let linebacker_depths: Vec<f64> = defenders
            .iter()
            .filter(|d| d.position.is_linebacker())
            .map(|d| d.depth())
            .collect();
        let avg_lb_depth = if linebacker_depths.is_empty() {
            0.0
        } else {
            round_to(linebacker_depths.iter().sum::<f64>() / linebacker_depths.len() as f64, 2)
        };

        let deep_corners = defenders
            .iter()
            .filter(|d| d.position.is_corner() && d.depth() > self.config.deep_corner_min)
            .count();

        let analysis = CoverageAnalysis {
            deep_safeties: deep.len(),
            deep_corners,
            man_signals: matchups.len(),
            zone_signals: shallow.len(),
            avg_lb_depth,
            matchups,
        };
        let coverage_call = decide(
            analysis.deep_safeties,
            analysis.man_signals,
            analysis.zone_signals,
            &self.config,
        );

        debug!(
            %coverage_call,
            deep_safeties = analysis.deep_safeties,
            man_signals = analysis.man_signals,
            zone_signals = analysis.zone_signals,
            "classified coverage"
        );
        CoverageCall {
            coverage_call,
            analysis,
        }
    }
}

impl Default for CoverageClassifier {
    fn default() -> Self {
        Self::new(CoverageConfig::default())
    }
}
