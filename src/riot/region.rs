//! Shard discovery.
//!
//! Accounts and match histories can live on different shards. Both are found
//! by probing the configured routes in order and stopping at the first one
//! that answers usefully. Probing is strictly sequential: the first success
//! decides the shard, so later routes must not be queried.

use std::future::Future;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::RiotApi;
use crate::config::ShardRoute;
use crate::fetch::get_json;
use crate::models::{AccountIdentity, RiotId};

/// Try each route in order until `probe` yields a value.
pub(crate) async fn probe_shards<T, F, Fut>(
    routing: &[ShardRoute],
    mut probe: F,
) -> Option<(ShardRoute, T)>
where
    F: FnMut(ShardRoute) -> Fut,
    Fut: Future<Output = Option<T>>,
{
    for route in routing {
        if let Some(found) = probe(route.clone()).await {
            return Some((route.clone(), found));
        }
    }
    None
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountDto {
    #[serde(default)]
    puuid: Option<String>,
}

/// Finds which shard owns an account and where its match history lives.
#[derive(Clone)]
pub struct RegionResolver {
    api: RiotApi,
    routing: Vec<ShardRoute>,
}

impl RegionResolver {
    pub fn new(api: RiotApi, routing: Vec<ShardRoute>) -> Self {
        Self { api, routing }
    }

    pub fn routing(&self) -> &[ShardRoute] {
        &self.routing
    }

    /// Resolve a Riot ID to an account. `None` once every shard has failed.
    pub async fn resolve(&self, display_name: &str, tag_line: &str) -> Option<AccountIdentity> {
        let riot_id = RiotId::new(display_name, tag_line);
        let api = &self.api;
        let (name, tag) = (riot_id.game_name.as_str(), riot_id.tag_line.as_str());

        let found = probe_shards(&self.routing, |route| async move {
            let url = api.account_url(&route, name, tag).ok()?;
            match get_json::<AccountDto>(api.transport(), &url, api.lookup_timeout()).await {
                Ok(AccountDto {
                    puuid: Some(puuid),
                }) if !puuid.is_empty() => Some(puuid),
                Ok(_) => {
                    warn!(shard = %route.name, "Account lookup returned no puuid");
                    None
                }
                Err(e) => {
                    debug!(shard = %route.name, kind = e.kind(), "Account lookup failed: {}", e);
                    None
                }
            }
        })
        .await;

        match found {
            Some((route, puuid)) => {
                info!(shard = %route.name, "Resolved {}", riot_id);
                Some(AccountIdentity {
                    riot_id,
                    puuid,
                    home_shard: route.name,
                })
            }
            None => {
                info!("No shard knows {}", riot_id);
                None
            }
        }
    }

    /// Second probing pass over the match-routing space. A shard whose
    /// listing is empty is skipped like a failed one.
    pub async fn locate_match_history(
        &self,
        puuid: &str,
        count: usize,
    ) -> Option<(ShardRoute, Vec<String>)> {
        let api = &self.api;

        let found = probe_shards(&self.routing, |route| async move {
            let url = api.match_ids_url(&route, puuid, count).ok()?;
            match get_json::<Vec<String>>(api.transport(), &url, api.lookup_timeout()).await {
                Ok(ids) if !ids.is_empty() => Some(ids),
                Ok(_) => {
                    debug!(shard = %route.name, "Empty match history");
                    None
                }
                Err(e) => {
                    debug!(shard = %route.name, kind = e.kind(), "Match listing failed: {}", e);
                    None
                }
            }
        })
        .await;

        if let Some((route, ids)) = &found {
            info!(shard = %route.name, "Found {} match ids", ids.len());
        }
        found
    }
}
