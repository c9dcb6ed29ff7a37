//! Twitter/X API integration module.
//!
//! This module contains the authenticated client and the recent search call,
//! using OAuth 2.0 Bearer Token authentication.

mod api;
mod client;
pub mod models;
mod search;

// Re-export public API
pub use api::{
    rate_limit_wait_secs, sanitize_for_logging, DEFAULT_RATE_LIMIT_WAIT_SECS,
    RATE_LIMIT_RESET_HEADER,
};
pub use client::XClient;
pub use models::{Author, Place, Post, SearchResults};
pub use search::{
    build_query, build_search_url, fetch_posts, search_recent, RateLimit, SearchOutcome,
    EXPANSIONS, PLACE_FIELDS, TWEET_FIELDS, USER_FIELDS,
};
