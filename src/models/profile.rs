//! Summoner profile models.

use serde::{Deserialize, Serialize};

/// Subset of the summoner-v4 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerProfile {
    #[serde(default)]
    pub profile_icon_id: u32,

    #[serde(default)]
    pub summoner_level: Option<u64>,
}

/// Profile details ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    pub icon_url: String,
    pub level: Option<u64>,
}
