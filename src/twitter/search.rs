//! Recent search for Twitter API.
//!
//! This module issues one request to the Twitter API v2 recent search endpoint,
//! with fixed field selectors and the expansions that resolve author and place
//! ids into full records.

use log::{debug, error, info, warn};

use crate::config::effective_max_results;
use crate::error::{Error, Result};

use super::api::{sanitize_for_logging, send_request};
use super::client::XClient;
use super::models::{SearchResponse, SearchResults};

/// Post fields requested on every search.
pub const TWEET_FIELDS: &[&str] = &[
    "id",
    "text",
    "created_at",
    "attachments",
    "author_id",
    "in_reply_to_user_id",
    "lang",
    "possibly_sensitive",
    "context_annotations",
    "public_metrics",
    "referenced_tweets",
];

/// Author fields requested on every search.
pub const USER_FIELDS: &[&str] = &[
    "id",
    "name",
    "username",
    "description",
    "location",
    "public_metrics",
    "verified",
];

/// Place fields requested on every search.
pub const PLACE_FIELDS: &[&str] = &["id", "full_name", "country"];

/// Expansions resolving author and place ids.
pub const EXPANSIONS: &[&str] = &["author_id", "geo.place_id"];

/// Rate-limit details returned instead of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Seconds until the quota window resets
    pub wait_secs: u64,
}

/// Result of one search call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Records returned by the API; all-empty when the search failed
    Results(SearchResults),
    /// The quota is exhausted; the run should stop without retrying
    RateLimited(RateLimit),
}

/// Builds the search query: the keyword restricted to one source language.
pub fn build_query(keyword: &str, language: &str) -> String {
    format!("{} lang:{}", keyword, language)
}

/// Builds the full recent search URL with every selector and expansion.
pub fn build_search_url(client: &XClient, keyword: &str, max_results: u32) -> String {
    let config = client.config();
    let query = build_query(keyword, &config.language);
    format!(
        "{}?query={}&max_results={}&tweet.fields={}&user.fields={}&place.fields={}&expansions={}",
        config.search_url(),
        urlencoding::encode(&query),
        max_results,
        TWEET_FIELDS.join(","),
        USER_FIELDS.join(","),
        PLACE_FIELDS.join(","),
        EXPANSIONS.join(","),
    )
}

/// Performs the search and decodes the response, propagating every failure.
///
/// # Parameters
///
/// - `client`: Authenticated API client
/// - `keyword`: Text the posts must contain
/// - `max_results`: Requested result count (default and minimum 10)
///
/// # Returns
///
/// - `Ok(SearchResults)`: Posts with the authors and places included by the expansions
/// - `Err(Error::RateLimited)`: If the request quota is exhausted
/// - `Err(...)`: Network, API status or decoding failure
pub async fn search_recent(
    client: &XClient,
    keyword: &str,
    max_results: Option<u32>,
) -> Result<SearchResults> {
    let max_results = effective_max_results(max_results.or(Some(client.config().max_results)));
    info!(
        "Searching recent posts for keyword '{}' (max_results={})",
        sanitize_for_logging(keyword, 100),
        max_results
    );

    let url = build_search_url(client, keyword, max_results);
    debug!("Request URL: {}", url);
    debug!("Request headers: Authorization: Bearer [REDACTED]");

    let request_builder = client.http().get(&url);
    let response_text = send_request(request_builder, "search_recent").await?;

    let response: SearchResponse = serde_json::from_str(&response_text)?;

    if let Some(meta) = &response.meta {
        info!(
            "Search returned {} posts (newest: {}, oldest: {})",
            meta.result_count,
            meta.newest_id.as_deref().unwrap_or("none"),
            meta.oldest_id.as_deref().unwrap_or("none")
        );
    }

    for problem in &response.errors {
        warn!(
            "Partial error in search response: {} ({}) for resource {}",
            problem.title.as_deref().unwrap_or("unknown"),
            sanitize_for_logging(problem.detail.as_deref().unwrap_or(""), 200),
            problem.resource_id.as_deref().unwrap_or("unknown")
        );
    }

    let results = SearchResults::from(response);
    info!(
        "Fetched {} posts, {} authors, {} places",
        results.posts.len(),
        results.authors.len(),
        results.places.len()
    );
    Ok(results)
}

/// Performs the search, converting failures into an explicit outcome.
///
/// A rate limit becomes [`SearchOutcome::RateLimited`]. Any other failure is
/// logged and yields empty results, which callers treat as "no data".
///
/// # Example
///
/// ```rust,no_run
/// use tweet_harvest::{fetch_posts, SearchConfig, SearchOutcome, XClient};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let client = XClient::new("your_bearer_token", &SearchConfig::default()).unwrap();
///     match fetch_posts(&client, "rust", None).await {
///         SearchOutcome::Results(results) => println!("{} posts", results.posts.len()),
///         SearchOutcome::RateLimited(limit) => println!("retry in {}s", limit.wait_secs),
///     }
/// }
/// ```
pub async fn fetch_posts(
    client: &XClient,
    keyword: &str,
    max_results: Option<u32>,
) -> SearchOutcome {
    match search_recent(client, keyword, max_results).await {
        Ok(results) => SearchOutcome::Results(results),
        Err(Error::RateLimited { wait_secs }) => {
            SearchOutcome::RateLimited(RateLimit { wait_secs })
        }
        Err(e) => {
            error!("Failed to fetch posts: {}", e);
            SearchOutcome::Results(SearchResults::default())
        }
    }
}
