//! OAuth 2.0 Bearer Token helpers for Twitter/X API integration.
//!
//! The recent search endpoint is read-only and accepts an app-only Bearer Token.
//! The token is supplied by the caller; acquiring or refreshing it is out of scope.

use reqwest::header::HeaderValue;

use crate::error::{Error, Result};

/// Builds the Authorization header for OAuth 2.0 Bearer Token authentication.
///
/// # Format
///
/// ```text
/// Bearer YOUR_BEARER_TOKEN_HERE
/// ```
///
/// # Example
///
/// ```rust
/// use tweet_harvest::build_bearer_auth_header;
///
/// let header = build_bearer_auth_header("your_bearer_token");
/// assert_eq!(header, "Bearer your_bearer_token");
/// ```
pub fn build_bearer_auth_header(bearer_token: &str) -> String {
    format!("Bearer {}", bearer_token)
}

/// Validates a bearer token and turns it into a sensitive `Authorization` header value.
///
/// # Errors
///
/// Returns `Error::Initialization` if the token is empty, contains whitespace,
/// or cannot be represented as an HTTP header value.
pub fn bearer_header_value(bearer_token: &str) -> Result<HeaderValue> {
    if bearer_token.is_empty() {
        return Err(Error::Initialization(
            "bearer token cannot be empty".to_string(),
        ));
    }

    if bearer_token.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(Error::Initialization(
            "bearer token must not contain whitespace or control characters".to_string(),
        ));
    }

    let mut value = HeaderValue::from_str(&build_bearer_auth_header(bearer_token))
        .map_err(|e| Error::Initialization(format!("invalid bearer token: {}", e)))?;
    value.set_sensitive(true);
    Ok(value)
}
