//! HTTP transport for the upstream game-data API.
//!
//! Every upstream call goes through [`Transport`], which reports either the
//! response body or a [`FetchError`] naming the kind of failure. Callers in
//! the `riot` module decide what a failure means; nothing here retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[cfg(test)]
pub(crate) mod mock;

/// Header carrying the static API credential.
pub const API_KEY_HEADER: &str = "x-riot-token";

/// Errors that can occur during fetching.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Timeout(_) => "timeout",
            FetchError::HttpStatus { .. } => "status",
            FetchError::Transport(_) => "transport",
            FetchError::Malformed(_) => "malformed",
            FetchError::InvalidUrl(_) => "invalid_url",
        }
    }
}

/// A GET-only transport with a per-call deadline.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url`, failing if no complete 2xx response arrives within `deadline`.
    async fn get(&self, url: &Url, deadline: Duration) -> Result<Vec<u8>, FetchError>;
}

/// Fetch and decode a JSON body.
pub async fn get_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    url: &Url,
    deadline: Duration,
) -> Result<T, FetchError> {
    let body = transport.get(url, deadline).await?;
    serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))
}

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// API key sent with every request
    pub api_key: String,

    /// User agent string
    pub user_agent: String,
}

impl HttpTransportConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            user_agent: concat!("rift-rewind/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// reqwest-backed transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport that authenticates every request with the API key.
    pub fn new(config: HttpTransportConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("rift-rewind")),
        );

        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| FetchError::Transport("API key is not a valid header value".to_string()))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url, deadline: Duration) -> Result<Vec<u8>, FetchError> {
        debug!("GET {}", url.path());

        let response = self
            .client
            .get(url.as_str())
            .timeout(deadline)
            .send()
            .await
            .map_err(|e| classify(e, deadline))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| classify(e, deadline))?;
        Ok(bytes.to_vec())
    }
}

fn classify(error: reqwest::Error, deadline: Duration) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(deadline)
    } else {
        FetchError::Transport(error.to_string())
    }
}

/// Append path segments to a base URL, percent-encoding each one.
pub fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
