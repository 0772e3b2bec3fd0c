//! The analytics bundle handed to chart and narrative consumers.

use serde::{Deserialize, Serialize};

use super::{CompatibilityRow, PlayerPerformance};

/// Scalar aggregates over the extracted performances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Mean KDA, 2 decimals
    pub avg_kda: f64,

    /// Percent of extracted matches won, 1 decimal
    pub win_rate_pct: f64,

    /// Mean damage to champions, rounded to a whole number
    pub avg_damage: f64,

    /// Number of successful extractions
    pub match_count: usize,
}

/// Frozen snapshot of one analysis. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsPayload {
    performances: Vec<PlayerPerformance>,
    compatibility: Vec<CompatibilityRow>,
    summary: SummaryMetrics,
}

impl AnalyticsPayload {
    pub(crate) fn assemble(
        performances: Vec<PlayerPerformance>,
        compatibility: Vec<CompatibilityRow>,
        summary: SummaryMetrics,
    ) -> Self {
        Self {
            performances,
            compatibility,
            summary,
        }
    }

    /// Performances, oldest first.
    pub fn performances(&self) -> &[PlayerPerformance] {
        &self.performances
    }

    /// Ranked compatibility table.
    pub fn compatibility(&self) -> &[CompatibilityRow] {
        &self.compatibility
    }

    pub fn summary(&self) -> &SummaryMetrics {
        &self.summary
    }

    /// KDA per match, oldest first.
    pub fn kda_series(&self) -> Vec<f64> {
        self.performances.iter().map(|p| p.kda).collect()
    }

    /// The best `n` teammates by the table's ranking.
    pub fn top_teammates(&self, n: usize) -> &[CompatibilityRow] {
        &self.compatibility[..n.min(self.compatibility.len())]
    }

    /// Most recent performance, if any.
    pub fn latest(&self) -> Option<&PlayerPerformance> {
        self.performances.last()
    }
}
