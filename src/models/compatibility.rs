//! Teammate compatibility models.

use serde::{Deserialize, Serialize};

use crate::analysis::calculate_win_rate_pct;

/// One (match, teammate) pairing. Only lives inside the aggregator fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeammateLink {
    pub match_id: String,

    /// `name#tag`
    pub teammate: String,

    pub win: bool,
}

/// Aggregated record with one recurring teammate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityRow {
    /// `name#tag`
    pub teammate: String,

    pub games: u32,
    pub wins: u32,

    /// wins / games * 100, 1 decimal
    pub win_rate_pct: f64,
}

impl CompatibilityRow {
    /// Create a row with the win rate calculated.
    pub fn new(teammate: String, games: u32, wins: u32) -> Self {
        Self {
            teammate,
            games,
            wins,
            win_rate_pct: calculate_win_rate_pct(wins, games),
        }
    }
}
