//! Configuration Module
//!
//! Handles loading explorer configuration from environment variables.

use std::env;
use std::time::Duration;

/// Public PokeAPI endpoint used when `POKEAPI_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// PokeAPI base URL without a trailing slash
    pub api_base_url: String,
    /// Response cache TTL in seconds (also the sweep period)
    pub cache_ttl: u64,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API base URL (default: https://pokeapi.co/api/v2)
    /// - `CACHE_TTL_SECS` - Cache TTL in seconds (default: 300)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// HTTP timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: 300,
            http_timeout: 10,
        }
    }
}
