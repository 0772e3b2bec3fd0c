//! Match detail records as returned by the match-v5 API.
//!
//! Raw payloads are parsed into typed records up front. Fields the pipeline
//! depends on are required; a payload missing one of them is rejected as a
//! whole rather than silently defaulted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::RiotId;

/// Shape errors when parsing a match payload.
#[derive(Debug, Error)]
pub enum MatchShapeError {
    #[error("invalid match JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("match {0} has no participants")]
    NoParticipants(String),
}

/// Optional per-participant challenge stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenges {
    /// Fraction of team kills the player took part in (0.0 to 1.0)
    #[serde(default)]
    pub kill_participation: Option<f64>,
}

/// One participant of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default, rename = "riotIdGameName")]
    pub game_name: Option<String>,

    #[serde(default, rename = "riotIdTagline")]
    pub tag_line: Option<String>,

    #[serde(default)]
    pub puuid: Option<String>,

    pub champion_name: String,

    /// Empty for modes without lanes
    #[serde(default)]
    pub team_position: Option<String>,

    pub team_id: u32,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_damage_dealt_to_champions: u64,
    pub total_damage_taken: u64,
    pub gold_earned: u64,
    pub vision_score: u32,

    #[serde(default)]
    pub total_minions_killed: Option<u32>,

    #[serde(default)]
    pub challenges: Option<Challenges>,
}

impl Participant {
    /// Case-insensitive match on both name and tag. Missing parts never match.
    pub fn is_player(&self, game_name: &str, tag_line: &str) -> bool {
        match (&self.game_name, &self.tag_line) {
            (Some(name), Some(tag)) => {
                name.to_lowercase() == game_name.to_lowercase()
                    && tag.to_lowercase() == tag_line.to_lowercase()
            }
            _ => false,
        }
    }

    /// `name#tag` key used for teammate grouping; missing parts render as `?`.
    pub fn identity_key(&self) -> String {
        let part = |p: &Option<String>| match p.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => "?".to_string(),
        };
        format!("{}#{}", part(&self.game_name), part(&self.tag_line))
    }

    pub fn riot_id(&self) -> Option<RiotId> {
        Some(RiotId::new(self.game_name.as_ref()?, self.tag_line.as_ref()?))
    }

    /// Lane position, or `UNKNOWN` when absent or blank.
    pub fn role(&self) -> &str {
        match self.team_position.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => "UNKNOWN",
        }
    }

    pub fn kill_participation(&self) -> f64 {
        self.challenges
            .as_ref()
            .and_then(|c| c.kill_participation)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatch {
    metadata: RawMetadata,
    info: RawInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetadata {
    match_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInfo {
    game_duration: u64,
    participants: Vec<Participant>,
}

/// A fetched match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub match_id: String,

    /// Routing shard the match was fetched from
    pub shard: String,

    pub duration_seconds: u64,
    pub participants: Vec<Participant>,
}

impl MatchRecord {
    /// Parse a match-v5 detail payload.
    pub fn parse(shard: &str, body: &[u8]) -> Result<Self, MatchShapeError> {
        let raw: RawMatch = serde_json::from_slice(body)?;
        if raw.info.participants.is_empty() {
            return Err(MatchShapeError::NoParticipants(raw.metadata.match_id));
        }

        Ok(Self {
            match_id: raw.metadata.match_id,
            shard: shard.to_string(),
            duration_seconds: raw.info.game_duration,
            participants: raw.info.participants,
        })
    }

    /// Position of the first participant matching the Riot ID.
    pub fn find_player(&self, game_name: &str, tag_line: &str) -> Option<usize> {
        self.participants
            .iter()
            .position(|p| p.is_player(game_name, tag_line))
    }

    /// Duration in minutes, floored to avoid dividing by zero.
    pub fn duration_minutes(&self) -> f64 {
        (self.duration_seconds as f64 / 60.0).max(1e-9)
    }
}
