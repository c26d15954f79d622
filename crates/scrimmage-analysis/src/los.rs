//! Line-of-scrimmage estimation
//!
//! The line is the vertical pixel split that leaves the most even player
//! count on each side. Three tiers run in order:
//!
//! 1. every midpoint between adjacent sorted x positions,
//! 2. fixed pixel offsets around the median when no split is balanced enough,
//! 3. the x at sorted index `n / 2` if nothing produced a candidate.

use crate::config::LosConfig;
use scrimmage_core::{Detection, LosMethod};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LosEstimate {
    pub pixel_x: f64,
    /// `|left - right|` for the chosen split
    pub balance_score: usize,
    pub method: LosMethod,
}

/// `|left - right|` where left is `x < line` and right is `x >= line`
pub fn balance_score(xs: &[f64], line: f64) -> usize {
    let left = xs.iter().filter(|&&x| x < line).count();
    let right = xs.len() - left;
    left.abs_diff(right)
}

/// Median with the mean of the two middle values for even counts
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Best candidate so far. Strict `<` keeps the first of equal scores.
#[derive(Default)]
struct Search {
    best: Option<(f64, usize)>,
}

impl Search {
    fn offer(&mut self, xs: &[f64], line: f64) -> bool {
        let score = balance_score(xs, line);
        match self.best {
            Some((_, best)) if score >= best => false,
            _ => {
                self.best = Some((line, score));
                true
            }
        }
    }

    fn score(&self) -> Option<usize> {
        self.best.map(|(_, score)| score)
    }
}

/// Estimate the line from player detections (referees already removed).
///
/// Returns `None` with fewer than `config.min_players` players.
pub fn estimate_line_of_scrimmage<'a, I>(players: I, config: &LosConfig) -> Option<LosEstimate>
where
    I: IntoIterator<Item = &'a Detection>,
{
    let xs: Vec<f64> = players.into_iter().map(|d| d.x).collect();
    if xs.len() < config.min_players || xs.is_empty() {
        return None;
    }

    let mut sorted = xs.clone();
    sorted.sort_by(f64::total_cmp);

    let mut search = Search::default();
    let mut method = LosMethod::BalancedSplit;

    for pair in sorted.windows(2) {
        search.offer(&xs, (pair[0] + pair[1]) / 2.0);
    }

    let unbalanced = search.score().is_none_or(|score| score > config.max_balance_score);
    if unbalanced {
        let median_x = median(&sorted);
        warn!(
            best_score = ?search.score(),
            median_x,
            "no balanced split between players, trying offsets around the median"
        );
        for offset in &config.median_offsets_pixels {
            if search.offer(&xs, median_x + offset) {
                method = LosMethod::MedianOffset;
            }
        }
    }

    let estimate = match search.best {
        Some((pixel_x, balance_score)) => LosEstimate {
            pixel_x,
            balance_score,
            method,
        },
        None => {
            let target = xs.len() / 2;
            let pixel_x = sorted.get(target).copied().unwrap_or_else(|| median(&sorted));
            LosEstimate {
                pixel_x,
                balance_score: balance_score(&xs, pixel_x),
                method: LosMethod::SortedIndex,
            }
        }
    };

    debug!(
        pixel_x = estimate.pixel_x,
        score = estimate.balance_score,
        method = ?estimate.method,
        players = xs.len(),
        "estimated line of scrimmage"
    );
    Some(estimate)
}
