//! PokeAPI Client
//!
//! Fetches PokeAPI resources through the response cache.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// HTTP client for the PokeAPI.
///
/// Every request is keyed in the cache by its full URL. Only successful
/// (2xx) bodies are cached.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: ResponseCache,
}

impl PokeApiClient {
    /// Creates a client from configuration, sharing the given cache.
    pub fn new(config: &Config, cache: ResponseCache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the shared response cache.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// URL of the first page of location areas.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// Fetches a page of location areas, the first page when `page_url` is None.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.first_page_url(),
        };
        self.fetch_json(&url).await
    }

    /// Fetches the encounters of a single location area.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches a single Pokemon.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self
            .cache
            .fetch_or_load(url, move || self.fetch_body(url))
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_body(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
