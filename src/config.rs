//! Configuration module for tweet-harvest.
//!
//! This module contains the search configuration and environment variable handling
//! for the Twitter/X API integration. Nothing here is exposed on the command line:
//! result count and language are fixed, and the API base URL can only be redirected
//! through the environment.

use log::{debug, error, info};
use std::env;
use url::Url;

use crate::error::{Error, Result};

/// Default Twitter/X API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.x.com";

/// Source language every search is restricted to.
pub const SEARCH_LANGUAGE: &str = "en";

/// Default and minimum number of results requested per search.
pub const MIN_MAX_RESULTS: u32 = 10;

/// Environment variable overriding [`DEFAULT_API_BASE_URL`].
pub const BASE_URL_ENV: &str = "xapi_base_url";

/// Configuration for the recent search request.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Scheme and host of the API, without a trailing slash
    pub api_base_url: String,
    /// Language filter appended to every query
    pub language: String,
    /// Number of results requested when the caller gives no bound
    pub max_results: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            language: SEARCH_LANGUAGE.to_string(),
            max_results: MIN_MAX_RESULTS,
        }
    }
}

impl SearchConfig {
    /// Creates a new `SearchConfig`, reading the optional base URL override from the environment.
    ///
    /// # Optional Environment Variables
    ///
    /// - `xapi_base_url`: Alternative API host (e.g. a local proxy or mock server)
    ///
    /// # Returns
    ///
    /// - `Ok(SearchConfig)`: Defaults, with the base URL replaced if the override is set
    /// - `Err(Error::Config)`: If the override is not an absolute http(s) URL
    pub fn from_env() -> Result<Self> {
        info!("Loading search configuration from environment variables");

        match env::var(BASE_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => {
                info!("Found {} environment variable", BASE_URL_ENV);
                Self::default().with_base_url(raw.trim())
            }
            _ => {
                debug!("No {} set, using {}", BASE_URL_ENV, DEFAULT_API_BASE_URL);
                Ok(Self::default())
            }
        }
    }

    /// Replaces the API base URL after validating it.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self> {
        let parsed = Url::parse(raw).map_err(|e| {
            error!("Invalid API base URL '{}': {}", raw, e);
            Error::Config {
                message: format!("invalid API base URL '{}': {}", raw, e),
                key: Some(BASE_URL_ENV.to_string()),
            }
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            error!("Unsupported scheme '{}' in API base URL", parsed.scheme());
            return Err(Error::Config {
                message: format!("API base URL must use http or https, got '{}'", raw),
                key: Some(BASE_URL_ENV.to_string()),
            });
        }

        self.api_base_url = parsed.as_str().trim_end_matches('/').to_string();
        info!("Using API base URL: {}", self.api_base_url);
        Ok(self)
    }

    /// Full URL of the recent search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}/2/tweets/search/recent", self.api_base_url)
    }
}

/// Applies the default and lower bound to a requested result count.
///
/// No upper bound is enforced here; the API's own per-page ceiling applies.
pub fn effective_max_results(requested: Option<u32>) -> u32 {
    match requested {
        Some(n) if n < MIN_MAX_RESULTS => {
            debug!(
                "Requested max_results {} is below the minimum, using {}",
                n, MIN_MAX_RESULTS
            );
            MIN_MAX_RESULTS
        }
        Some(n) => n,
        None => MIN_MAX_RESULTS,
    }
}

/// Masks a credential for logging, keeping at most eight leading and trailing characters.
///
/// ```rust
/// use tweet_harvest::config::mask_token;
///
/// assert_eq!(mask_token("short"), "short...");
/// assert_eq!(mask_token("AAAAAAAAxxxxxxxxxxBBBBBBBB"), "AAAAAAAA...BBBBBBBB");
/// ```
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();

    let prefix: String = chars.iter().take(8).collect();
    if len > 16 {
        let suffix: String = chars[len - 8..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        format!("{}...", prefix)
    }
}
