//! End-to-end analysis flows.
//!
//! [`AnalysisPipeline`] wires the Riot client, the analytics fold and the
//! narrative generator into the two user-facing flows: a match-history
//! analysis and a latest-match roast. Only identity and listing failures
//! abort a flow; every per-match failure just shrinks the sample.

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::analysis::{aggregate, build, extract, summarize};
use crate::config::AppConfig;
use crate::fetch::Transport;
use crate::models::{
    AccountIdentity, AnalyticsPayload, CompatibilityRow, PlayerPerformance, ProfileCard, RiotId,
};
use crate::narrative::backend::AiBackend;
use crate::narrative::{Narrative, NarrativeGenerator};
use crate::riot::{MatchCache, MatchFetcher, RegionResolver, RiotApi, SummonerLookup};

/// Matches sampled for the teammate block of a roast.
pub const ROAST_SAMPLE: usize = 10;

/// Teammates listed in the text summary.
pub const SUMMARY_TEAMMATES: usize = 8;

/// Failures that end a flow with a user-facing message.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Player {riot_id} was not found on any shard")]
    NotFound { riot_id: String },

    #[error("No match history found for {riot_id}")]
    EmptyResult { riot_id: String },

    #[error("Latest match of {riot_id} could not be analysed")]
    NoUsableMatch { riot_id: String },
}

/// Result of [`AnalysisPipeline::analyze`].
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub account: AccountIdentity,

    /// Shard that served the match history
    pub match_shard: String,

    /// Ids asked for
    pub requested_matches: usize,

    /// Ids the listing returned. `payload.summary.match_count` may be lower.
    pub listed_matches: usize,

    pub payload: AnalyticsPayload,
    pub profile: Option<ProfileCard>,
    pub generated_at: DateTime<Utc>,
}

/// Result of [`AnalysisPipeline::roast`].
#[derive(Debug, Clone, Serialize)]
pub struct RoastReport {
    pub account: AccountIdentity,
    pub performance: PlayerPerformance,
    pub compatibility: Vec<CompatibilityRow>,
    pub narrative: Narrative,
    pub profile: Option<ProfileCard>,
}

#[derive(Clone)]
pub struct AnalysisPipeline {
    resolver: RegionResolver,
    fetcher: MatchFetcher,
    summoners: SummonerLookup,
    narrative: NarrativeGenerator,
}

impl AnalysisPipeline {
    pub fn new(
        resolver: RegionResolver,
        fetcher: MatchFetcher,
        summoners: SummonerLookup,
        narrative: NarrativeGenerator,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            summoners,
            narrative,
        }
    }

    /// Build every component from configuration.
    pub fn from_config(
        transport: Arc<dyn Transport>,
        config: &AppConfig,
        backend: Option<Arc<dyn AiBackend>>,
    ) -> Self {
        let api = RiotApi::new(transport, &config.riot);
        let resolver = RegionResolver::new(api.clone(), config.riot.routing.clone());
        let fetcher = MatchFetcher::new(api.clone(), resolver.clone());
        let summoners = SummonerLookup::new(api, &config.riot);
        let narrative = NarrativeGenerator::new(backend, config.ai.max_tokens);

        Self::new(resolver, fetcher, summoners, narrative)
    }

    pub fn narrative_configured(&self) -> bool {
        self.narrative.is_configured()
    }

    async fn resolve(&self, display_name: &str, tag_line: &str) -> Result<AccountIdentity, PipelineError> {
        self.resolver
            .resolve(display_name, tag_line)
            .await
            .ok_or_else(|| PipelineError::NotFound {
                riot_id: RiotId::new(display_name, tag_line).to_string(),
            })
    }

    /// Analyse the `count` most recent matches of a player.
    #[instrument(skip(self))]
    pub async fn analyze(
        &self,
        display_name: &str,
        tag_line: &str,
        count: usize,
    ) -> Result<AnalysisReport, PipelineError> {
        let account = self.resolve(display_name, tag_line).await?;

        let (shard, ids) = self
            .fetcher
            .list_match_ids(&account.puuid, count)
            .await
            .ok_or_else(|| PipelineError::EmptyResult {
                riot_id: account.riot_id.to_string(),
            })?;

        let mut cache = MatchCache::new();
        let mut matches = self.fetcher.fetch_matches(&shard, &ids, &mut cache).await;
        // Listing is newest first; the analytics run oldest first.
        matches.reverse();

        let (name, tag) = (account.display_name(), account.tag_line());
        let performances: Vec<PlayerPerformance> = matches
            .iter()
            .filter_map(|m| extract(m, name, tag))
            .collect();
        let compatibility = aggregate(&matches, name, tag);
        let summary = summarize(&performances);

        info!(
            listed = ids.len(),
            fetched = matches.len(),
            extracted = performances.len(),
            "Analysis of {} complete",
            account.riot_id
        );

        let payload = build(performances, compatibility, summary);
        let profile = self.summoners.profile_card(&shard.name, &account.puuid).await;

        Ok(AnalysisReport {
            match_shard: shard.name,
            requested_matches: count,
            listed_matches: ids.len(),
            account,
            payload,
            profile,
            generated_at: Utc::now(),
        })
    }

    /// Roast the latest match, with teammate chemistry from the recent sample.
    #[instrument(skip(self))]
    pub async fn roast(&self, display_name: &str, tag_line: &str) -> Result<RoastReport, PipelineError> {
        let account = self.resolve(display_name, tag_line).await?;
        let riot_id = account.riot_id.to_string();

        let (shard, latest_ids) = self
            .fetcher
            .list_match_ids(&account.puuid, 1)
            .await
            .ok_or_else(|| PipelineError::EmptyResult {
                riot_id: riot_id.clone(),
            })?;

        let (name, tag) = (account.display_name(), account.tag_line());
        let mut cache = MatchCache::new();

        let performance = match latest_ids.first() {
            Some(id) => self
                .fetcher
                .fetch_match_cached(&shard, id, &mut cache)
                .await
                .and_then(|m| extract(&m, name, tag)),
            None => None,
        }
        .ok_or_else(|| PipelineError::NoUsableMatch {
            riot_id: riot_id.clone(),
        })?;

        let compatibility = match self.fetcher.list_match_ids(&account.puuid, ROAST_SAMPLE).await {
            Some((sample_shard, ids)) => {
                let recent = self
                    .fetcher
                    .fetch_matches(&sample_shard, &ids, &mut cache)
                    .await;
                aggregate(&recent, name, tag)
            }
            None => Vec::new(),
        };

        let narrative = self.narrative.roast(&performance, &compatibility).await;
        let profile = self.summoners.profile_card(&shard.name, &account.puuid).await;

        info!(source = ?narrative.source, "Roast of {} complete", riot_id);

        Ok(RoastReport {
            account,
            performance,
            compatibility,
            narrative,
            profile,
        })
    }
}

/// Plain-text summary of an analysis.
pub fn render_summary(report: &AnalysisReport) -> String {
    let summary = report.payload.summary();
    let mut text = String::new();

    let _ = writeln!(
        text,
        "{} — {} matches",
        report.account.riot_id, summary.match_count
    );
    let _ = writeln!(text, "- Average KDA: {:.2}", summary.avg_kda);
    let _ = writeln!(text, "- Win Rate: {:.1}%", summary.win_rate_pct);
    let _ = writeln!(text, "- Avg Damage: {:.0}", summary.avg_damage);
    let _ = writeln!(text);
    let _ = writeln!(text, "Top teammates (by win rate):");

    let top = report.payload.top_teammates(SUMMARY_TEAMMATES);
    if top.is_empty() {
        let _ = writeln!(text, "• none");
    }
    for row in top {
        let _ = writeln!(
            text,
            "• {}: {:.1}% (W {}/{})",
            row.teammate, row.win_rate_pct, row.wins, row.games
        );
    }

    text
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::fetch::mock::MockTransport;
    use crate::models::fixtures::{match_json, participant_json, team_match, with_kda};
    use crate::narrative::NarrativeSource;
    use crate::riot::test_support::test_config;

    const ACCOUNT: &str = "https://americas.test/riot/account/v1/accounts/by-riot-id/Me/EUW";
    const MATCHES: &str = "https://americas.test/lol/match/v5/matches";

    fn ids_url(count: usize) -> String {
        format!("{MATCHES}/by-puuid/p-1/ids?count={count}")
    }

    fn pipeline(transport: Arc<MockTransport>) -> AnalysisPipeline {
        let config = AppConfig {
            riot: test_config(),
            ..AppConfig::default()
        };
        AnalysisPipeline::from_config(transport, &config, None)
    }

    fn me_with(kills: u32, deaths: u32, assists: u32, win: bool) -> serde_json::Value {
        with_kda(participant_json("Me", "EUW", 100, win), kills, deaths, assists)
    }

    /// Three listed matches, newest first. The middle one does not contain
    /// the player.
    fn history() -> MockTransport {
        MockTransport::new()
            .with_json(ACCOUNT, json!({"puuid": "p-1"}))
            .with_json(&ids_url(3), json!(["NA1_3", "NA1_2", "NA1_1"]))
            .with_json(
                &format!("{MATCHES}/NA1_1"),
                match_json(
                    "NA1_1",
                    1800,
                    vec![me_with(2, 1, 4, true), participant_json("A", "1", 100, true)],
                ),
            )
            .with_json(
                &format!("{MATCHES}/NA1_2"),
                team_match("NA1_2", ("Someone", "Else"), &[("A", "1")], false),
            )
            .with_json(
                &format!("{MATCHES}/NA1_3"),
                match_json(
                    "NA1_3",
                    1800,
                    vec![me_with(10, 2, 0, false), participant_json("B", "2", 100, false)],
                ),
            )
    }

    #[tokio::test]
    async fn test_analyze_skips_unextractable_match() {
        let transport = Arc::new(history());

        let report = pipeline(transport.clone())
            .analyze("Me", "EUW", 3)
            .await
            .unwrap();

        assert_eq!(report.match_shard, "americas");
        assert_eq!(report.requested_matches, 3);
        assert_eq!(report.listed_matches, 3);

        let payload = &report.payload;
        assert_eq!(payload.summary().match_count, 2);
        assert_eq!(payload.kda_series(), vec![6.0, 5.0]);
        assert_eq!(payload.performances()[0].match_id, "NA1_1");
        assert_eq!(payload.latest().unwrap().match_id, "NA1_3");
        assert_eq!(payload.summary().win_rate_pct, 50.0);
        assert_eq!(payload.summary().avg_kda, 5.5);

        let teammates: Vec<_> = payload
            .compatibility()
            .iter()
            .map(|r| (r.teammate.as_str(), r.games, r.wins))
            .collect();
        assert_eq!(teammates, vec![("A#1", 1, 1), ("B#2", 1, 0)]);

        // Summoner lookup misses on the mock; the report survives without it.
        assert!(report.profile.is_none());
        assert_eq!(transport.call_count("/matches/NA1_"), 3);
    }

    #[tokio::test]
    async fn test_analyze_not_found() {
        let transport = Arc::new(MockTransport::new());

        let err = pipeline(transport.clone())
            .analyze("Me", "EUW", 5)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::NotFound { ref riot_id } if riot_id == "Me#EUW"));
        assert_eq!(transport.call_count("by-puuid"), 0);
    }

    #[tokio::test]
    async fn test_analyze_empty_history() {
        let transport =
            Arc::new(MockTransport::new().with_json(ACCOUNT, json!({"puuid": "p-1"})));

        let err = pipeline(transport).analyze("Me", "EUW", 5).await.unwrap_err();
        assert!(matches!(err, PipelineError::EmptyResult { .. }));
    }

    #[tokio::test]
    async fn test_analyze_zero_extractions_is_not_an_error() {
        let transport = Arc::new(
            MockTransport::new()
                .with_json(ACCOUNT, json!({"puuid": "p-1"}))
                .with_json(&ids_url(2), json!(["NA1_2", "NA1_1"]))
                .with_status(&format!("{MATCHES}/NA1_2"), 500),
        );

        let report = pipeline(transport).analyze("Me", "EUW", 2).await.unwrap();
        assert_eq!(report.payload.summary().match_count, 0);
        assert_eq!(report.payload.summary().avg_kda, 0.0);
        assert!(report.payload.compatibility().is_empty());
    }

    #[tokio::test]
    async fn test_roast_fetches_latest_once_and_falls_back() {
        let transport = Arc::new(
            history()
                .with_json(&ids_url(1), json!(["NA1_3"]))
                .with_json(&ids_url(ROAST_SAMPLE), json!(["NA1_3", "NA1_2", "NA1_1"]))
                .with_json(
                    &format!("{MATCHES}/NA1_3"),
                    match_json(
                        "NA1_3",
                        1800,
                        vec![me_with(5, 0, 3, false), participant_json("B", "2", 100, false)],
                    ),
                ),
        );

        let report = pipeline(transport.clone()).roast("Me", "EUW").await.unwrap();

        assert_eq!(report.performance.match_id, "NA1_3");
        assert_eq!(report.performance.kda_line(), "5/0/3");
        assert_eq!(report.narrative.source, NarrativeSource::Fallback);
        assert!(report.narrative.text.contains("5/0/3"));
        assert_eq!(report.compatibility.len(), 2);
        assert_eq!(transport.call_count("/matches/NA1_3"), 1);
        assert_eq!(transport.call_count("/matches/NA1_1"), 1);
    }

    #[tokio::test]
    async fn test_roast_latest_without_player() {
        let transport = Arc::new(
            MockTransport::new()
                .with_json(ACCOUNT, json!({"puuid": "p-1"}))
                .with_json(&ids_url(1), json!(["NA1_9"]))
                .with_json(
                    &format!("{MATCHES}/NA1_9"),
                    team_match("NA1_9", ("Other", "NA1"), &[], true),
                ),
        );

        let err = pipeline(transport).roast("Me", "EUW").await.unwrap_err();
        assert!(matches!(err, PipelineError::NoUsableMatch { .. }));
    }

    #[tokio::test]
    async fn test_render_summary() {
        let report = pipeline(Arc::new(history()))
            .analyze("Me", "EUW", 3)
            .await
            .unwrap();

        let text = render_summary(&report);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Me#EUW — 2 matches");
        assert_eq!(lines[1], "- Average KDA: 5.50");
        assert_eq!(lines[2], "- Win Rate: 50.0%");
        assert!(text.contains("• A#1: 100.0% (W 1/1)"));
        assert!(text.contains("• B#2: 0.0% (W 0/1)"));
    }
}
