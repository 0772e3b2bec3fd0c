//! Teammate compatibility leaderboard.
//!
//! A grouped fold over (match, teammate) pairs: every teammate who shared the
//! target player's team gets one game per shared match and one win per shared
//! win. Rows are ranked by win rate, then games, then identity.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{CompatibilityRow, MatchRecord, TeammateLink};

/// Teammates of the named player in one match. Empty if the player is absent.
pub fn teammate_links(record: &MatchRecord, display_name: &str, tag_line: &str) -> Vec<TeammateLink> {
    let Some(me) = record.find_player(display_name, tag_line) else {
        return Vec::new();
    };
    let target = &record.participants[me];

    record
        .participants
        .iter()
        .enumerate()
        .filter(|(i, p)| *i != me && p.team_id == target.team_id)
        .map(|(_, p)| TeammateLink {
            match_id: record.match_id.clone(),
            teammate: p.identity_key(),
            win: target.win,
        })
        .collect()
}

/// Fold matches into the ranked compatibility table.
pub fn aggregate(matches: &[MatchRecord], display_name: &str, tag_line: &str) -> Vec<CompatibilityRow> {
    let mut counts: HashMap<String, (u32, u32)> = HashMap::new();

    for link in matches
        .iter()
        .flat_map(|m| teammate_links(m, display_name, tag_line))
    {
        let entry = counts.entry(link.teammate).or_default();
        entry.0 += 1;
        if link.win {
            entry.1 += 1;
        }
    }

    let mut rows: Vec<CompatibilityRow> = counts
        .into_iter()
        .map(|(teammate, (games, wins))| CompatibilityRow::new(teammate, games, wins))
        .collect();
    rows.sort_by(rank_order);
    rows
}

/// Win rate desc, games desc, identity asc.
fn rank_order(a: &CompatibilityRow, b: &CompatibilityRow) -> Ordering {
    b.win_rate_pct
        .total_cmp(&a.win_rate_pct)
        .then_with(|| b.games.cmp(&a.games))
        .then_with(|| a.teammate.cmp(&b.teammate))
}
