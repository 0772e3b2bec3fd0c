//! Player record extraction.

use super::{calculate_kda, round_to};
use crate::models::{MatchRecord, PlayerPerformance};

/// Normalize one match into the named player's performance.
///
/// Returns `None` when the player is not in the match (renamed, or the match
/// predates a name change). Callers skip such matches.
pub fn extract(record: &MatchRecord, display_name: &str, tag_line: &str) -> Option<PlayerPerformance> {
    let index = record.find_player(display_name, tag_line)?;
    let p = &record.participants[index];
    let minutes = record.duration_minutes();

    Some(PlayerPerformance {
        match_id: record.match_id.clone(),
        champion: p.champion_name.clone(),
        role: p.role().to_string(),
        kills: p.kills,
        deaths: p.deaths,
        assists: p.assists,
        kda: calculate_kda(p.kills, p.deaths, p.assists),
        creep_score: p.total_minions_killed.unwrap_or(0),
        damage_to_champions: p.total_damage_dealt_to_champions,
        damage_taken: p.total_damage_taken,
        gold: p.gold_earned,
        vision_score: p.vision_score,
        kill_participation_pct: round_to(p.kill_participation() * 100.0, 2),
        damage_per_minute: round_to(p.total_damage_dealt_to_champions as f64 / minutes, 1),
        vision_per_minute: round_to(p.vision_score as f64 / minutes, 2),
        win: p.win,
    })
}
