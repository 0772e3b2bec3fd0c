//! Riot Games API client.
//!
//! Endpoint paths, shard probing and payload decoding for the account-v1,
//! match-v5 and summoner-v4 APIs are isolated here. Every call goes through
//! the [`Transport`] and every failure is absorbed into `None` at this layer,
//! so the pipeline only ever sees "found" or "not found".

pub mod matches;
pub mod region;
pub mod summoner;

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::config::{RiotConfig, ShardRoute};
use crate::fetch::{join_segments, FetchError, Transport};

pub use matches::{MatchCache, MatchFetcher};
pub use region::RegionResolver;
pub use summoner::SummonerLookup;

/// Shared transport plus per-call deadlines.
#[derive(Clone)]
pub struct RiotApi {
    transport: Arc<dyn Transport>,
    lookup_timeout: Duration,
    match_timeout: Duration,
}

impl RiotApi {
    pub fn new(transport: Arc<dyn Transport>, config: &RiotConfig) -> Self {
        Self {
            transport,
            lookup_timeout: Duration::from_secs(config.lookup_timeout_seconds),
            match_timeout: Duration::from_secs(config.match_timeout_seconds),
        }
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    pub fn match_timeout(&self) -> Duration {
        self.match_timeout
    }

    /// `/riot/account/v1/accounts/by-riot-id/{name}/{tag}`
    pub fn account_url(&self, shard: &ShardRoute, name: &str, tag: &str) -> Result<Url, FetchError> {
        join_segments(
            &shard.base_url,
            &["riot", "account", "v1", "accounts", "by-riot-id", name, tag],
        )
    }

    /// `/lol/match/v5/matches/by-puuid/{puuid}/ids?count={count}`
    pub fn match_ids_url(
        &self,
        shard: &ShardRoute,
        puuid: &str,
        count: usize,
    ) -> Result<Url, FetchError> {
        let mut url = join_segments(
            &shard.base_url,
            &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
        )?;
        url.query_pairs_mut()
            .append_pair("count", &count.to_string());
        Ok(url)
    }

    /// `/lol/match/v5/matches/{match_id}`
    pub fn match_url(&self, shard: &ShardRoute, match_id: &str) -> Result<Url, FetchError> {
        join_segments(&shard.base_url, &["lol", "match", "v5", "matches", match_id])
    }

    /// `/lol/summoner/v4/summoners/by-puuid/{puuid}`
    pub fn summoner_url(&self, platform: &Url, puuid: &str) -> Result<Url, FetchError> {
        join_segments(
            platform,
            &["lol", "summoner", "v4", "summoners", "by-puuid", puuid],
        )
    }
}
