//! Match listing and detail fetching.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::{RegionResolver, RiotApi};
use crate::config::ShardRoute;
use crate::models::MatchRecord;

/// Request-scoped store of already fetched matches. Dropped with the request.
#[derive(Debug, Default)]
pub struct MatchCache {
    matches: HashMap<String, MatchRecord>,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, match_id: &str) -> Option<&MatchRecord> {
        self.matches.get(match_id)
    }

    pub fn insert(&mut self, record: MatchRecord) {
        self.matches.insert(record.match_id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Lists and fetches matches. One id at a time, no retries.
#[derive(Clone)]
pub struct MatchFetcher {
    api: RiotApi,
    resolver: RegionResolver,
}

impl MatchFetcher {
    pub fn new(api: RiotApi, resolver: RegionResolver) -> Self {
        Self { api, resolver }
    }

    /// Most recent match ids (newest first) and the shard holding them.
    /// Never returns more than `count` ids.
    pub async fn list_match_ids(
        &self,
        puuid: &str,
        count: usize,
    ) -> Option<(ShardRoute, Vec<String>)> {
        let (route, mut ids) = self.resolver.locate_match_history(puuid, count).await?;
        ids.truncate(count);
        Some((route, ids))
    }

    /// Fetch one match. Any failure is logged and yields `None`.
    pub async fn fetch_match(&self, shard: &ShardRoute, match_id: &str) -> Option<MatchRecord> {
        let url = match self.api.match_url(shard, match_id) {
            Ok(url) => url,
            Err(e) => {
                warn!(match_id, "Skipping match: {}", e);
                return None;
            }
        };

        let body = match self
            .api
            .transport()
            .get(&url, self.api.match_timeout())
            .await
        {
            Ok(body) => body,
            Err(e) => {
                warn!(match_id, kind = e.kind(), "Skipping match: {}", e);
                return None;
            }
        };

        match MatchRecord::parse(&shard.name, &body) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(match_id, kind = "malformed", "Skipping match: {}", e);
                None
            }
        }
    }

    /// Fetch through the request cache.
    pub async fn fetch_match_cached(
        &self,
        shard: &ShardRoute,
        match_id: &str,
        cache: &mut MatchCache,
    ) -> Option<MatchRecord> {
        if let Some(record) = cache.get(match_id) {
            debug!(match_id, "Match served from request cache");
            return Some(record.clone());
        }

        let record = self.fetch_match(shard, match_id).await?;
        cache.insert(record.clone());
        Some(record)
    }

    /// Fetch each id in order, dropping the ones that fail.
    pub async fn fetch_matches(
        &self,
        shard: &ShardRoute,
        match_ids: &[String],
        cache: &mut MatchCache,
    ) -> Vec<MatchRecord> {
        let mut records = Vec::with_capacity(match_ids.len());
        for match_id in match_ids {
            if let Some(record) = self.fetch_match_cached(shard, match_id, cache).await {
                records.push(record);
            }
        }

        info!(
            "Fetched {}/{} matches from {}",
            records.len(),
            match_ids.len(),
            shard.name
        );
        records
    }
}
