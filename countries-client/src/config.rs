//! Client configuration loading from environment.

use std::env;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::http::DEFAULT_USER_AGENT;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v2";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// `None` disables the currency cache.
    pub cache: Option<CacheConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache: None,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// - `COUNTRIES_API_URL` (default `https://restcountries.com/v2`)
    /// - `COUNTRIES_TIMEOUT_SECS` (default 10, `0` disables the timeout)
    /// - `COUNTRIES_CACHE_CAPACITY` (unset or `0` disables the cache)
    /// - `COUNTRIES_CACHE_TTL_SECS` (unset means entries never expire)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let number = |name: &'static str| -> Result<Option<u64>, ConfigError> {
            lookup(name)
                .map(|value| {
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidNumber { name, value })
                })
                .transpose()
        };

        let base_url = lookup("COUNTRIES_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match number("COUNTRIES_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        let ttl = number("COUNTRIES_CACHE_TTL_SECS")?.map(Duration::from_secs);
        let cache = match number("COUNTRIES_CACHE_CAPACITY")? {
            None | Some(0) => None,
            Some(capacity) => Some(CacheConfig {
                capacity: capacity as usize,
                ttl,
            }),
        };

        Ok(Self {
            base_url,
            timeout,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache,
        })
    }
}
