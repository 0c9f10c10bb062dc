//! HTTP client for the Spore.com REST API

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::paths;
use crate::types::{AssetId, Page, Username};

/// Public REST endpoint root
const DEFAULT_BASE_URL: &str = "http://spore.com/rest";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the Spore.com REST API
///
/// Every operation performs exactly one GET request and converts the XML
/// body into a normalized object tree with the declaration stripped. Calls
/// hold no shared state; the client is cheap to clone and any number of
/// calls may run concurrently.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    user_agent: Option<String>,
}

impl RestClient {
    /// Create a new client for the public endpoint
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
        })
    }

    /// Create a client backed by a custom reqwest client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
        }
    }

    /// Override the endpoint root (mirrors, local test servers)
    ///
    /// Trailing slashes are trimmed so path concatenation stays exact.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Set a custom user agent string
    ///
    /// If not set, reqwest's default user agent will be used.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Endpoint root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dispatch a GET and return the response body text.
    ///
    /// Any transport failure or non-2xx status classifies into a single
    /// request failure carrying the observed status and the attempted URL.
    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("GET {url}");

        let mut request = self.client.get(url);
        if let Some(ref user_agent) = self.user_agent {
            request = request.header("User-Agent", user_agent);
        }

        let response = request.send().await.map_err(|e| {
            warn!("request to {url} failed: {e}");
            Error::request_failed(e.status().map(|s| s.as_u16()), url)
        })?;

        let status = response.status();
        trace!("response status {status} for {url}");
        if !status.is_success() {
            warn!("request to {url} failed with status {status}");
            return Err(Error::request_failed(Some(status.as_u16()), url));
        }

        response
            .text()
            .await
            .map_err(|e| Error::request_failed(e.status().map(|s| s.as_u16()), url))
    }

    /// Fetch a namespace-relative path and normalize the XML body.
    async fn get_normalized(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let body = self.fetch_text(&url).await?;
        let mut value = spore_xml::to_compact(&body)?;
        spore_xml::strip_declaration(&mut value);
        Ok(value)
    }

    /// Make a raw GET request to a path under the REST root
    pub async fn get(&self, path: &str) -> Result<Value> {
        if path.starts_with('/') {
            self.get_normalized(path).await
        } else {
            self.get_normalized(&format!("/{path}")).await
        }
    }

    /// Get daily stats about Spore.com
    pub async fn stats(&self) -> Result<Value> {
        self.get_normalized(&paths::stats()).await
    }

    /// Get height, diet, abilities and other stats for a creature
    pub async fn creature_stats(&self, creature: &AssetId) -> Result<Value> {
        self.get_normalized(&paths::creature_stats(creature)).await
    }

    /// Get profile pic, tagline, user id and creation date for a user
    pub async fn user(&self, username: &Username) -> Result<Value> {
        self.get_normalized(&paths::user_profile(username)).await
    }

    /// Get id, name, creation date, type, parent and rating for assets
    /// created by a user
    pub async fn user_assets(&self, username: &Username, page: Page) -> Result<Value> {
        self.get_normalized(&paths::user_assets(username, page))
            .await
    }

    /// Get id, name, tags, subscription count and rating for sporecasts
    /// subscribed to by a user
    pub async fn user_sporecasts(&self, username: &Username) -> Result<Value> {
        self.get_normalized(&paths::user_sporecasts(username)).await
    }

    /// Get achievement ids and unlock dates for a user
    pub async fn user_achievements(&self, username: &Username, page: Page) -> Result<Value> {
        self.get_normalized(&paths::user_achievements(username, page))
            .await
    }

    /// Get buddy names, ids and the total buddy count for a user
    pub async fn user_buddies(&self, username: &Username, page: Page) -> Result<Value> {
        self.get_normalized(&paths::user_buddies(username, page))
            .await
    }

    /// Get the users who have added the given user as a buddy
    pub async fn user_subscribers(&self, username: &Username, page: Page) -> Result<Value> {
        self.get_normalized(&paths::user_subscribers(username, page))
            .await
    }

    /// Get id and name for the assets in a sporecast
    pub async fn sporecast_assets(&self, sporecast: &AssetId, page: Page) -> Result<Value> {
        self.get_normalized(&paths::sporecast_assets(sporecast, page))
            .await
    }

    /// Get name, description, tags, type, parent, rating, creation date
    /// and author for an asset
    pub async fn asset(&self, asset: &AssetId) -> Result<Value> {
        self.get_normalized(&paths::asset(asset)).await
    }

    /// Get comments on an asset with sender names and dates
    pub async fn asset_comments(&self, asset: &AssetId, page: Page) -> Result<Value> {
        self.get_normalized(&paths::asset_comments(asset, page))
            .await
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default REST client")
    }
}
