//! Payload assembly.

use crate::models::{AnalyticsPayload, CompatibilityRow, PlayerPerformance, SummaryMetrics};

/// Bundle the derived pieces into one immutable snapshot. No derivation
/// happens here; `performances` must already be oldest first.
pub fn build(
    performances: Vec<PlayerPerformance>,
    compatibility: Vec<CompatibilityRow>,
    summary: SummaryMetrics,
) -> AnalyticsPayload {
    AnalyticsPayload::assemble(performances, compatibility, summary)
}
