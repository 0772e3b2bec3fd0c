//! Configuration loading and validation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Upper bound on matches analysed per request.
pub const MAX_MATCH_COUNT: usize = 100;

/// One shard of the upstream API: a routing name and its base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardRoute {
    pub name: String,
    pub base_url: Url,
}

impl ShardRoute {
    pub fn new(name: impl Into<String>, base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::ValidationError(format!("bad shard url {base_url}: {e}")))?;
        Ok(Self {
            name: name.into(),
            base_url,
        })
    }
}

/// Riot API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiotConfig {
    /// Environment variable holding the API key
    #[serde(default = "default_riot_key_env")]
    pub api_key_env: String,

    /// Ordered shard candidates, probed first to last
    #[serde(default = "default_routing")]
    pub routing: Vec<ShardRoute>,

    /// Match-routing region -> platform base URL (summoner lookups)
    #[serde(default = "default_platforms")]
    pub platforms: BTreeMap<String, Url>,

    /// Platform used when a region has no entry in `platforms`
    #[serde(default = "default_fallback_platform")]
    pub fallback_platform: Url,

    /// Deadline for identity, match-list and summoner calls
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_seconds: u64,

    /// Deadline for match-detail calls
    #[serde(default = "default_match_timeout")]
    pub match_timeout_seconds: u64,

    #[serde(default = "default_match_count")]
    pub default_match_count: usize,

    /// Data Dragon version used for profile icon URLs
    #[serde(default = "default_ddragon_version")]
    pub ddragon_version: String,
}

fn default_riot_key_env() -> String {
    "RIOT_API_KEY".to_string()
}

fn riot_url(host: &str) -> Url {
    Url::parse(&format!("https://{host}.api.riotgames.com")).expect("static riot host is a valid URL")
}

fn default_routing() -> Vec<ShardRoute> {
    ["americas", "europe", "asia", "sea"]
        .into_iter()
        .map(|name| ShardRoute {
            name: name.to_string(),
            base_url: riot_url(name),
        })
        .collect()
}

fn default_platforms() -> BTreeMap<String, Url> {
    [
        ("americas", "na1"),
        ("europe", "euw1"),
        ("asia", "kr"),
        ("sea", "sg2"),
    ]
    .into_iter()
    .map(|(region, platform)| (region.to_string(), riot_url(platform)))
    .collect()
}

fn default_fallback_platform() -> Url {
    riot_url("na1")
}

fn default_lookup_timeout() -> u64 {
    10
}

fn default_match_timeout() -> u64 {
    12
}

fn default_match_count() -> usize {
    10
}

fn default_ddragon_version() -> String {
    "14.20.1".to_string()
}

impl Default for RiotConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_riot_key_env(),
            routing: default_routing(),
            platforms: default_platforms(),
            fallback_platform: default_fallback_platform(),
            lookup_timeout_seconds: default_lookup_timeout(),
            match_timeout_seconds: default_match_timeout(),
            default_match_count: default_match_count(),
            ddragon_version: default_ddragon_version(),
        }
    }
}

/// AI backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Backend type: "ollama", "anthropic" or "none"
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Base URL for the AI service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the key for remote backends
    #[serde(default = "default_ai_key_env")]
    pub api_key_env: String,

    /// Timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_backend() -> String {
    "ollama".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_ai_key_env() -> String {
    "ANTHROPIC_API_KEY".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_max_tokens() -> u32 {
    3000
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_ai_key_env(),
            timeout_seconds: default_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub riot: RiotConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.riot.routing.is_empty() {
            return Err(ConfigError::ValidationError(
                "At least one shard route is required".to_string(),
            ));
        }

        if self.riot.lookup_timeout_seconds == 0 || self.riot.match_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Riot timeouts must be greater than 0".to_string(),
            ));
        }

        if !(1..=MAX_MATCH_COUNT).contains(&self.riot.default_match_count) {
            return Err(ConfigError::ValidationError(format!(
                "Default match count must be between 1 and {MAX_MATCH_COUNT}"
            )));
        }

        if self.ai.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "AI timeout must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
