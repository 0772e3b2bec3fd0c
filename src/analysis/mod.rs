//! Statistics derivation over fetched matches.
//!
//! - Per-match player extraction
//! - Teammate compatibility leaderboard
//! - Summary metrics
//! - Payload assembly

pub mod compatibility;
pub mod extract;
pub mod payload;
pub mod summary;

pub use compatibility::aggregate;
pub use extract::extract;
pub use payload::build;
pub use summary::summarize;

/// Round to a fixed number of decimals.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// (kills + assists) / max(1, deaths).
pub fn calculate_kda(kills: u32, deaths: u32, assists: u32) -> f64 {
    (kills + assists) as f64 / deaths.max(1) as f64
}

/// wins / games as a percentage with one decimal. Zero games gives 0.
pub fn calculate_win_rate_pct(wins: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        round_to(wins as f64 / games as f64 * 100.0, 1)
    }
}
