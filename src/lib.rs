//! # Tweet Harvest Library
//!
//! Searches recent posts on Twitter/X by keyword and saves them as a flat CSV file.
//! The API is called with OAuth 2.0 Bearer Token authentication against the v2
//! recent search endpoint.
//!
//! ## Pipeline
//!
//! 1. [`XClient::new`] builds an authenticated client
//! 2. [`fetch_posts`] runs one search and returns posts, authors and places
//! 3. [`build_rows`] joins them into one [`Row`] per post
//! 4. [`write_csv`] saves the rows
//!
//! [`run`] chains the four steps and reports a [`RunStatus`].
//!
//! ## Configuration
//!
//! - `xapi_base_url`: Alternative API host (defaults to `https://api.x.com`)
//! - `RUST_LOG`: Log filter (defaults to `info` in the binary)

pub mod config;
pub mod error;
pub mod oauth;
pub mod pipeline;
pub mod rows;
pub mod twitter;
pub mod writer;

// Re-export commonly used types and functions
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use oauth::build_bearer_auth_header;
pub use pipeline::{run, run_with_client, RunStatus};
pub use rows::{build_rows, join_records, Row};
pub use twitter::{fetch_posts, SearchOutcome, SearchResults, XClient};
pub use writer::write_csv;
