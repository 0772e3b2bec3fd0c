//! Per-match player performance.

use serde::{Deserialize, Serialize};

/// One player's normalized line from one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub match_id: String,
    pub champion: String,

    /// Lane position (`UNKNOWN` when the mode has none)
    pub role: String,

    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,

    /// (kills + assists) / max(1, deaths), unrounded
    pub kda: f64,

    pub creep_score: u32,
    pub damage_to_champions: u64,
    pub damage_taken: u64,
    pub gold: u64,
    pub vision_score: u32,

    /// Kill participation in percent, 2 decimals
    pub kill_participation_pct: f64,

    /// Damage to champions per minute, 1 decimal
    pub damage_per_minute: f64,

    /// Vision score per minute, 2 decimals
    pub vision_per_minute: f64,

    pub win: bool,
}

impl PlayerPerformance {
    /// `K/D/A` as shown to players.
    pub fn kda_line(&self) -> String {
        format!("{}/{}/{}", self.kills, self.deaths, self.assists)
    }

    pub fn result_label(&self) -> &'static str {
        if self.win {
            "WIN"
        } else {
            "LOSS"
        }
    }
}
