//! Player identity models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Riot ID: display name plus tag line, rendered as `name#tag`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl RiotId {
    /// Create a Riot ID, trimming surrounding whitespace.
    pub fn new(game_name: impl AsRef<str>, tag_line: impl AsRef<str>) -> Self {
        Self {
            game_name: game_name.as_ref().trim().to_string(),
            tag_line: tag_line.as_ref().trim().trim_start_matches('#').to_string(),
        }
    }

    /// Parse `name#tag`. The split happens at the last `#`.
    pub fn parse(s: &str) -> Option<Self> {
        let (name, tag) = s.rsplit_once('#')?;
        let id = Self::new(name, tag);
        if id.game_name.is_empty() || id.tag_line.is_empty() {
            None
        } else {
            Some(id)
        }
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

/// A resolved account. Built once per request by the region resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountIdentity {
    pub riot_id: RiotId,

    /// Stable player id required by every match-history call
    pub puuid: String,

    /// Shard that answered the identity lookup
    pub home_shard: String,
}

impl AccountIdentity {
    pub fn display_name(&self) -> &str {
        &self.riot_id.game_name
    }

    pub fn tag_line(&self) -> &str {
        &self.riot_id.tag_line
    }
}
