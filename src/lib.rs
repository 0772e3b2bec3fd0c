//! # Rift Rewind
//!
//! League of Legends match-history analytics over the Riot Games API.
//!
//! ## Architecture
//!
//! - **riot**: Shard discovery, match listing/fetching and summoner lookups
//! - **fetch**: HTTP transport with per-call deadlines and classified failures
//! - **models**: Match records, performances, compatibility rows, payloads
//! - **analysis**: Player extraction, teammate compatibility, summary metrics
//! - **narrative**: AI-generated roasts with a local fallback
//! - **chart**: Chart requests and renderers
//! - **pipeline**: End-to-end analysis and roast flows
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod analysis;
pub mod api;
pub mod chart;
pub mod config;
pub mod fetch;
pub mod models;
pub mod narrative;
pub mod pipeline;
pub mod riot;

pub use models::*;
