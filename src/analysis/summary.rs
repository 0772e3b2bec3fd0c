//! Summary metrics over extracted performances.

use super::round_to;
use crate::models::{PlayerPerformance, SummaryMetrics};

/// Means over whatever was successfully extracted. `match_count` is the size
/// of that sample, not the number of matches requested.
pub fn summarize(performances: &[PlayerPerformance]) -> SummaryMetrics {
    let match_count = performances.len();
    if match_count == 0 {
        return SummaryMetrics::default();
    }

    let n = match_count as f64;
    let kda_sum: f64 = performances.iter().map(|p| p.kda).sum();
    let wins = performances.iter().filter(|p| p.win).count() as f64;
    let damage_sum: u64 = performances.iter().map(|p| p.damage_to_champions).sum();

    SummaryMetrics {
        avg_kda: round_to(kda_sum / n, 2),
        win_rate_pct: round_to(wins / n * 100.0, 1),
        avg_damage: round_to(damage_sum as f64 / n, 0),
        match_count,
    }
}
