//! Authenticated API handle.

use log::{debug, error, info};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::Client;

use crate::config::{mask_token, SearchConfig};
use crate::error::{Error, Result};
use crate::oauth::bearer_header_value;

/// A reqwest client carrying the Bearer Token plus the search configuration.
#[derive(Debug, Clone)]
pub struct XClient {
    http: Client,
    config: SearchConfig,
}

impl XClient {
    /// Builds an authenticated client for the recent search endpoint.
    ///
    /// # Parameters
    ///
    /// - `bearer_token`: App-only Bearer Token from the Twitter Developer Portal
    /// - `config`: Search configuration (base URL, language, result count)
    ///
    /// # Returns
    ///
    /// - `Ok(XClient)`: Ready to issue requests
    /// - `Err(Error::Initialization)`: If the token is malformed or the transport cannot be built
    ///
    /// # Example
    ///
    /// ```rust
    /// use tweet_harvest::{SearchConfig, XClient};
    ///
    /// let client = XClient::new("AAAAAAAAAAAAAAAAAAAAAexample", &SearchConfig::default());
    /// assert!(client.is_ok());
    /// assert!(XClient::new("", &SearchConfig::default()).is_err());
    /// ```
    pub fn new(bearer_token: &str, config: &SearchConfig) -> Result<Self> {
        info!("Initializing Twitter API client");
        debug!("Bearer token (masked): {}", mask_token(bearer_token));

        let auth_value = bearer_header_value(bearer_token).map_err(|e| {
            error!("Rejected bearer token: {}", e);
            e
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                Error::Initialization(format!("failed to build HTTP client: {}", e))
            })?;

        info!("Twitter API client initialized for {}", config.api_base_url);
        Ok(XClient {
            http,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}
