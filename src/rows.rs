//! Flattening of posts, authors and places into output rows.
//!
//! Every post yields exactly one [`Row`], in input order. Author and place
//! columns are attached only when the referenced id is among the records the
//! API included with the response.

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, error, info};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::twitter::{Author, Place, Post, SearchResults};

/// Columns always present in the output.
pub const POST_COLUMNS: [&str; 10] = [
    "tweet_id",
    "text",
    "created_at",
    "author_id",
    "lang",
    "possibly_sensitive",
    "retweets",
    "replies",
    "likes",
    "quotes",
];

/// Columns present when at least one row has a matched author.
pub const AUTHOR_COLUMNS: [&str; 8] = [
    "user_name",
    "username",
    "user_description",
    "user_location",
    "followers_count",
    "following_count",
    "tweet_count",
    "verified",
];

/// Columns present when at least one row has a matched place.
pub const PLACE_COLUMNS: [&str; 2] = ["place_name", "place_country"];

#[derive(Debug, Clone, PartialEq)]
pub struct PostColumns {
    pub tweet_id: String,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
    pub author_id: Option<String>,
    pub lang: Option<String>,
    pub possibly_sensitive: Option<bool>,
    pub retweets: u64,
    pub replies: u64,
    pub likes: u64,
    pub quotes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorColumns {
    pub user_name: String,
    pub username: String,
    pub user_description: Option<String>,
    pub user_location: Option<String>,
    pub followers_count: u64,
    pub following_count: u64,
    pub tweet_count: u64,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceColumns {
    pub place_name: String,
    pub place_country: Option<String>,
}

/// One post merged with its matched author and place.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub post: PostColumns,
    pub author: Option<AuthorColumns>,
    pub place: Option<PlaceColumns>,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Returns a field the row cannot be built without.
fn required(value: &Option<String>, kind: &str, id: &str, field: &str) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| Error::Transform(format!("{} {} has no {}", kind, id, field)))
}

/// Returns a count the row cannot be built without.
fn count(value: Option<u64>, kind: &str, id: &str, field: &str) -> Result<u64> {
    value.ok_or_else(|| Error::Transform(format!("{} {} has no {}", kind, id, field)))
}

fn flag(value: Option<bool>) -> String {
    value.map(|b| b.to_string()).unwrap_or_default()
}

impl PostColumns {
    fn from_post(post: &Post) -> Result<Self> {
        let tweet_id = required(&post.id, "post", "<unknown>", "id")?;
        let text = required(&post.text, "post", &tweet_id, "text")?;
        let metrics = post.public_metrics.ok_or_else(|| {
            Error::Transform(format!("post {} has no public_metrics", tweet_id))
        })?;
        let retweets = count(metrics.retweet_count, "post", &tweet_id, "retweet_count")?;
        let replies = count(metrics.reply_count, "post", &tweet_id, "reply_count")?;
        let likes = count(metrics.like_count, "post", &tweet_id, "like_count")?;
        let quotes = count(metrics.quote_count, "post", &tweet_id, "quote_count")?;

        Ok(PostColumns {
            tweet_id,
            text,
            created_at: post.created_at,
            author_id: post.author_id.clone(),
            lang: post.lang.clone(),
            possibly_sensitive: post.possibly_sensitive,
            retweets,
            replies,
            likes,
            quotes,
        })
    }

    pub fn fields(&self) -> Vec<String> {
        vec![
            self.tweet_id.clone(),
            self.text.clone(),
            self.created_at
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
                .unwrap_or_default(),
            text(&self.author_id),
            text(&self.lang),
            flag(self.possibly_sensitive),
            self.retweets.to_string(),
            self.replies.to_string(),
            self.likes.to_string(),
            self.quotes.to_string(),
        ]
    }
}

impl AuthorColumns {
    fn from_author(id: &str, author: &Author) -> Result<Self> {
        let metrics = author.public_metrics.ok_or_else(|| {
            Error::Transform(format!("user {} has no public_metrics", id))
        })?;

        Ok(AuthorColumns {
            user_name: required(&author.name, "user", id, "name")?,
            username: required(&author.username, "user", id, "username")?,
            user_description: author.description.clone(),
            user_location: author.location.clone(),
            followers_count: count(metrics.followers_count, "user", id, "followers_count")?,
            following_count: count(metrics.following_count, "user", id, "following_count")?,
            tweet_count: count(metrics.tweet_count, "user", id, "tweet_count")?,
            verified: author.verified,
        })
    }

    pub fn fields(&self) -> Vec<String> {
        vec![
            self.user_name.clone(),
            self.username.clone(),
            text(&self.user_description),
            text(&self.user_location),
            self.followers_count.to_string(),
            self.following_count.to_string(),
            self.tweet_count.to_string(),
            flag(self.verified),
        ]
    }
}

impl PlaceColumns {
    fn from_place(id: &str, place: &Place) -> Result<Self> {
        Ok(PlaceColumns {
            place_name: required(&place.full_name, "place", id, "full_name")?,
            place_country: place.country.clone(),
        })
    }

    pub fn fields(&self) -> Vec<String> {
        vec![self.place_name.clone(), text(&self.place_country)]
    }
}

/// Joins posts with their authors and places, failing the whole batch on a malformed record.
///
/// Duplicate author or place ids resolve to the last occurrence.
///
/// # Returns
///
/// - `Ok(Vec<Row>)`: One row per post, in input order
/// - `Err(Error::Transform)`: If a post, or an author or place it references,
///   lacks a field its columns need
pub fn join_records(results: &SearchResults) -> Result<Vec<Row>> {
    let mut authors: HashMap<&str, &Author> = HashMap::new();
    for author in &results.authors {
        let id = author
            .id
            .as_deref()
            .ok_or_else(|| Error::Transform("included user has no id".to_string()))?;
        authors.insert(id, author);
    }

    let mut places: HashMap<&str, &Place> = HashMap::new();
    for place in &results.places {
        let id = place
            .id
            .as_deref()
            .ok_or_else(|| Error::Transform("included place has no id".to_string()))?;
        places.insert(id, place);
    }

    let mut rows = Vec::with_capacity(results.posts.len());
    for post in &results.posts {
        let post_columns = PostColumns::from_post(post)?;

        let author = match post
            .author_id
            .as_deref()
            .and_then(|id| authors.get_key_value(id))
        {
            Some((id, author)) => Some(AuthorColumns::from_author(id, author)?),
            None => {
                debug!("No included author for post {}", post_columns.tweet_id);
                None
            }
        };

        let place = match post.place_id().and_then(|id| places.get_key_value(id)) {
            Some((id, place)) => Some(PlaceColumns::from_place(id, place)?),
            None => None,
        };

        rows.push(Row {
            post: post_columns,
            author,
            place,
        });
    }

    Ok(rows)
}

/// Joins records, returning an empty batch instead of an error.
///
/// A partial batch is never returned: either every post becomes a row or none does.
pub fn build_rows(results: &SearchResults) -> Vec<Row> {
    match join_records(results) {
        Ok(rows) => {
            info!("Built {} rows", rows.len());
            rows
        }
        Err(e) => {
            error!("Failed to process posts: {}", e);
            Vec::new()
        }
    }
}
