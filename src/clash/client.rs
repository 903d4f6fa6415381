//! Authenticated HTTP client for the Clash Royale API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::ClashConfig;

use super::types::{Battle, RankingList};

/// Errors that can occur talking to the Clash Royale API.
#[derive(Debug, Error)]
pub enum ClashError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {endpoint}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("Missing API token (set CR_API_TOKEN)")]
    MissingToken,
}

/// Client holding the shared connection pool and bearer token.
#[derive(Debug, Clone)]
pub struct ClashClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ClashClient {
    /// Build a client from configuration. Fails when no token is
    /// resolvable from the environment or the config file.
    pub fn from_config(config: &ClashConfig) -> Result<Self, ClashError> {
        let token = config.resolved_token().ok_or(ClashError::MissingToken)?;
        Self::new(config.base_url.clone(), token, config.timeout_seconds)
    }

    pub fn new(base_url: String, token: String, timeout_seconds: u64) -> Result<Self, ClashError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// GET a JSON endpoint, decoding the body on 200 and mapping any
    /// other status to [`ClashError::Status`].
    async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: String,
    ) -> Result<T, ClashError> {
        debug!("GET {}", url);

        let res = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => Err(ClashError::Status { endpoint, status }),
        }
    }

    /// Fetch the global Path of Legends Ultimate Champion leaderboard.
    pub async fn ultimate_champion_rankings(&self) -> Result<RankingList, ClashError> {
        let url = format!(
            "{}/locations/global/pathOfLegends/season/ultimateChampionRankings",
            self.base_url
        );
        self.request("leaderboard", url).await
    }

    /// Fetch a player's recent battles, most recent first.
    ///
    /// Player tags start with `#`, which must be percent-encoded in
    /// the request path.
    pub async fn battle_log(&self, tag: &str) -> Result<Vec<Battle>, ClashError> {
        let url = format!(
            "{}/players/{}/battlelog",
            self.base_url,
            urlencoding::encode(tag)
        );
        self.request("battlelog", url).await
    }
}
