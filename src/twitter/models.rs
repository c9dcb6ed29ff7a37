//! Typed records for the recent search response.
//!
//! Only the fields the CSV consumes are modeled. Every field of a post, user or
//! place is an `Option` so that a record missing one still decodes; whether the
//! record is usable is decided when rows are built. Unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level body of `GET /2/tweets/search/recent`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Absent when the search matched nothing
    #[serde(default)]
    pub data: Vec<Post>,
    #[serde(default)]
    pub includes: Includes,
    pub meta: Option<SearchMeta>,
    /// Partial errors, e.g. an expanded author that could not be resolved
    #[serde(default)]
    pub errors: Vec<ApiProblem>,
}

/// Expanded entities referenced by the posts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<Author>,
    #[serde(default)]
    pub places: Vec<Place>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchMeta {
    #[serde(default)]
    pub result_count: u64,
    pub newest_id: Option<String>,
    pub oldest_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiProblem {
    pub title: Option<String>,
    pub detail: Option<String>,
    pub resource_id: Option<String>,
}

/// One searchable post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: Option<String>,
    pub text: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub author_id: Option<String>,
    pub lang: Option<String>,
    pub possibly_sensitive: Option<bool>,
    pub public_metrics: Option<PostMetrics>,
    pub geo: Option<Geo>,
}

impl Post {
    /// Place id attached to the post, if any.
    pub fn place_id(&self) -> Option<&str> {
        self.geo.as_ref().and_then(|g| g.place_id.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PostMetrics {
    pub retweet_count: Option<u64>,
    pub reply_count: Option<u64>,
    pub like_count: Option<u64>,
    pub quote_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geo {
    pub place_id: Option<String>,
}

/// The account that created a post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub id: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub public_metrics: Option<AuthorMetrics>,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AuthorMetrics {
    pub followers_count: Option<u64>,
    pub following_count: Option<u64>,
    pub tweet_count: Option<u64>,
}

/// A geographic tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub country: Option<String>,
}

/// The three related record sets produced by one search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub posts: Vec<Post>,
    pub authors: Vec<Author>,
    pub places: Vec<Place>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl From<SearchResponse> for SearchResults {
    fn from(response: SearchResponse) -> Self {
        SearchResults {
            posts: response.data,
            authors: response.includes.users,
            places: response.includes.places,
        }
    }
}
