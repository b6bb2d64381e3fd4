// src/github/gateway.rs
// =============================================================================
// Talks to the GitHub REST API.
//
// Endpoints (all GET, unauthenticated):
//   /users/{username}                                   -> Profile
//   /users/{username}/repos?sort=created&per_page&page  -> [RepositorySummary]
//   /repos/{username}/{repo}/languages                  -> {language: bytes}
//
// The Gateway trait is what the rest of the program depends on. HttpGateway
// is the real implementation; tests use an in-memory one instead so they
// never touch the network.
//
// Failure mapping:
// - 404 on the profile endpoint -> ViewerError::NotFound
// - anything else that isn't 2xx, transport errors, bad JSON
//                               -> ViewerError::RequestFailed
// No retries: the first failure goes straight back to the caller.
// =============================================================================

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use anyhow::{bail, Context};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::models::{Profile, RepositorySummary};
use crate::error::{Result, ViewerError};

pub const DEFAULT_API_URL: &str = "https://api.github.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Read-only access to the three endpoints the viewer needs.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<Profile>;

    /// Newest repositories first (the server sorts by creation time).
    async fn fetch_repository_page(
        &self,
        username: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<RepositorySummary>>;

    async fn fetch_languages(&self, username: &str, repo: &str) -> Result<BTreeSet<String>>;
}

/// Settings for HttpGateway, filled in from the command line.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_url: String,
    pub user_agent: String,
    /// None means requests may wait forever
    pub timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

pub struct HttpGateway {
    client: Client,
    api_url: Url,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid user agent")?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let api_url = Url::parse(&config.api_url)
            .with_context(|| format!("Invalid API URL '{}'", config.api_url))?;
        if api_url.cannot_be_a_base() {
            bail!("API URL '{}' cannot have paths appended", config.api_url);
        }

        Ok(Self {
            client: builder.build().context("Failed to build HTTP client")?,
            api_url,
        })
    }

    // Builds "{api_url}/{segments...}" with each segment percent-encoded,
    // so a username can never smuggle extra path parts or a query string
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ViewerError::RequestFailed(format!("invalid API URL: {}", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // Sends the request; any status comes back as a response, only
    // transport problems are errors here
    async fn send(&self, url: Url) -> Result<Response> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ViewerError::RequestFailed(describe_transport_error(&e)))?;

        debug!(%url, status = %response.status(), "response");
        Ok(response)
    }
}

// Turns a response into T, treating every non-2xx status as a failure
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ViewerError::RequestFailed(format!("HTTP {}", status.as_u16())));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ViewerError::RequestFailed(format!("invalid response body: {e}")))
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        let url = self.endpoint(&["users", username])?;
        let response = self.send(url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ViewerError::NotFound(username.to_string()));
        }

        decode(response).await
    }

    async fn fetch_repository_page(
        &self,
        username: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<RepositorySummary>> {
        let mut url = self.endpoint(&["users", username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "created")
            .append_pair("per_page", &page_size.to_string())
            .append_pair("page", &page.to_string());

        decode(self.send(url).await?).await
    }

    async fn fetch_languages(&self, username: &str, repo: &str) -> Result<BTreeSet<String>> {
        let url = self.endpoint(&["repos", username, repo, "languages"])?;

        // The body maps language -> bytes of code; only the names matter
        let languages: BTreeMap<String, u64> = decode(self.send(url).await?).await?;
        Ok(languages.into_keys().collect())
    }
}

// Short, human-readable reason for a request that never got a response
fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else {
        error.to_string()
    }
}
