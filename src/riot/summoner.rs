//! Best-effort summoner profile lookup.
//!
//! Summoner data lives on platform shards, not on the regional routes used
//! for matches. The region -> platform table in config maps each region to a
//! single representative platform, which is wrong for accounts on any other
//! platform of that region. A miss just means no profile card.

use std::collections::BTreeMap;

use tracing::debug;
use url::Url;

use super::RiotApi;
use crate::config::RiotConfig;
use crate::fetch::get_json;
use crate::models::{ProfileCard, SummonerProfile};

const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

/// Profile icon URL on the Data Dragon CDN.
pub fn profile_icon_url(ddragon_version: &str, icon_id: u32) -> String {
    format!("{DDRAGON_CDN}/{ddragon_version}/img/profileicon/{icon_id}.png")
}

#[derive(Clone)]
pub struct SummonerLookup {
    api: RiotApi,
    platforms: BTreeMap<String, Url>,
    fallback_platform: Url,
    ddragon_version: String,
}

impl SummonerLookup {
    pub fn new(api: RiotApi, config: &RiotConfig) -> Self {
        Self {
            api,
            platforms: config.platforms.clone(),
            fallback_platform: config.fallback_platform.clone(),
            ddragon_version: config.ddragon_version.clone(),
        }
    }

    /// Platform base URL for a match-routing region.
    pub fn platform_for(&self, region: &str) -> &Url {
        self.platforms
            .get(region)
            .unwrap_or(&self.fallback_platform)
    }

    pub async fn summoner(&self, region: &str, puuid: &str) -> Option<SummonerProfile> {
        let platform = self.platform_for(region);
        let url = self.api.summoner_url(platform, puuid).ok()?;

        match get_json::<SummonerProfile>(self.api.transport(), &url, self.api.lookup_timeout())
            .await
        {
            Ok(profile) => Some(profile),
            Err(e) => {
                debug!(platform = %platform, kind = e.kind(), "Summoner lookup failed: {}", e);
                None
            }
        }
    }

    pub async fn profile_card(&self, region: &str, puuid: &str) -> Option<ProfileCard> {
        let profile = self.summoner(region, puuid).await?;
        Some(ProfileCard {
            icon_url: profile_icon_url(&self.ddragon_version, profile.profile_icon_id),
            level: profile.summoner_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::fetch::mock::MockTransport;
    use crate::riot::test_support::{api, test_config};

    #[test]
    fn test_profile_icon_url() {
        assert_eq!(
            profile_icon_url("14.20.1", 588),
            "https://ddragon.leagueoflegends.com/cdn/14.20.1/img/profileicon/588.png"
        );
    }

    #[test]
    fn test_platform_for_unknown_region_falls_back() {
        let lookup = SummonerLookup::new(api(Arc::new(MockTransport::new())), &test_config());
        assert_eq!(lookup.platform_for("sea").as_str(), "https://sg2.api.riotgames.com/");
        assert_eq!(lookup.platform_for("mars").as_str(), "https://na1.api.riotgames.com/");
    }

    #[tokio::test]
    async fn test_profile_card() {
        let transport = Arc::new(MockTransport::new().with_json(
            "https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/p-1",
            json!({"profileIconId": 4568, "summonerLevel": 312}),
        ));
        let lookup = SummonerLookup::new(api(transport), &test_config());

        let card = lookup.profile_card("europe", "p-1").await.unwrap();
        assert!(card.icon_url.ends_with("/profileicon/4568.png"));
        assert_eq!(card.level, Some(312));
    }

    #[test]
    fn test_profile_card_miss_is_none() {
        let lookup = SummonerLookup::new(api(Arc::new(MockTransport::new())), &test_config());
        let card = tokio_test::block_on(lookup.profile_card("asia", "p-1"));
        assert!(card.is_none());
    }
}
