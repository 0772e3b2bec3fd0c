//! Match payload builders shared by unit tests.

use serde_json::{json, Value};

/// A participant with plausible default stats.
pub(crate) fn participant_json(name: &str, tag: &str, team_id: u32, win: bool) -> Value {
    json!({
        "riotIdGameName": name,
        "riotIdTagline": tag,
        "puuid": format!("puuid-{}-{}", name, tag),
        "championName": "Ahri",
        "teamPosition": "MIDDLE",
        "teamId": team_id,
        "win": win,
        "kills": 5,
        "deaths": 2,
        "assists": 7,
        "totalDamageDealtToChampions": 24000,
        "totalDamageTaken": 18000,
        "goldEarned": 12000,
        "visionScore": 30,
        "totalMinionsKilled": 190,
        "challenges": { "killParticipation": 0.6 }
    })
}

/// Override kills/deaths/assists on a participant payload.
pub(crate) fn with_kda(mut participant: Value, kills: u32, deaths: u32, assists: u32) -> Value {
    participant["kills"] = json!(kills);
    participant["deaths"] = json!(deaths);
    participant["assists"] = json!(assists);
    participant
}

/// A full match-v5 detail payload.
pub(crate) fn match_json(match_id: &str, duration_seconds: u64, participants: Vec<Value>) -> Value {
    json!({
        "metadata": { "matchId": match_id },
        "info": {
            "gameDuration": duration_seconds,
            "participants": participants
        }
    })
}

/// A parsed five-versus-five match where `me` plays on team 100.
pub(crate) fn team_match(match_id: &str, me: (&str, &str), mates: &[(&str, &str)], win: bool) -> Value {
    let mut participants = vec![participant_json(me.0, me.1, 100, win)];
    participants.extend(
        mates
            .iter()
            .map(|(name, tag)| participant_json(name, tag, 100, win)),
    );
    participants.extend(
        (0..5).map(|i| participant_json(&format!("Enemy{}", i), "EN", 200, !win)),
    );
    match_json(match_id, 1800, participants)
}
