//! Core Twitter API utilities.
//!
//! Low-level helpers for sending a request and classifying the response:
//! success bodies are returned as text, HTTP 429 becomes `Error::RateLimited`
//! and every other failure becomes `Error::Api` or `Error::Network`.

use log::{debug, error, info, warn};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::error::{Error, Result};

/// Header carrying the epoch second at which the rate-limit window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-rate-limit-reset";

/// Wait horizon used when the reset header is missing or unreadable.
pub const DEFAULT_RATE_LIMIT_WAIT_SECS: u64 = 60;

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum number of characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let head: String = sanitized.chars().take(max_len).collect();
        format!("{}... [truncated, {} total bytes]", head, text.len())
    } else {
        sanitized
    }
}

/// Computes how long to wait before the rate-limit window resets.
///
/// # Parameters
///
/// - `headers`: Response headers of the 429 response
/// - `now`: Current time as a Unix timestamp in seconds
///
/// # Returns
///
/// `max(0, reset - now)`, or 60 seconds if the reset header is absent or not an integer.
pub fn rate_limit_wait_secs(headers: &HeaderMap, now: i64) -> u64 {
    let reset = headers
        .get(RATE_LIMIT_RESET_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok());

    match reset {
        Some(reset) => u64::try_from(reset.saturating_sub(now)).unwrap_or(0),
        None => {
            debug!(
                "No usable {} header, assuming {} seconds",
                RATE_LIMIT_RESET_HEADER, DEFAULT_RATE_LIMIT_WAIT_SECS
            );
            DEFAULT_RATE_LIMIT_WAIT_SECS
        }
    }
}

/// Sends a prepared request and returns the body of a successful response.
///
/// # Parameters
///
/// - `request_builder`: A configured `reqwest::RequestBuilder` ready to send
/// - `operation_name`: Human-readable name for the operation (for logging)
///
/// # Returns
///
/// - `Ok(String)`: The API response body on success
/// - `Err(Error::RateLimited)`: On HTTP 429
/// - `Err(Error::Api)`: On any other non-success status
/// - `Err(Error::Network)`: If the request could not be sent or read
pub(crate) async fn send_request(
    request_builder: reqwest::RequestBuilder,
    operation_name: &str,
) -> Result<String> {
    info!("Sending request for operation: {}", operation_name);

    let response = request_builder.send().await?;
    let status = response.status();
    info!(
        "Received response with status: {} for operation: {}",
        status, operation_name
    );

    if status.is_success() {
        let response_text = response.text().await?;
        debug!(
            "Response summary for '{}': {} bytes received",
            operation_name,
            response_text.len()
        );
        return Ok(response_text);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let now = chrono::Utc::now().timestamp();
        let wait_secs = rate_limit_wait_secs(response.headers(), now);
        warn!(
            "Rate limit reached for operation '{}', window resets in {} seconds",
            operation_name, wait_secs
        );
        return Err(Error::RateLimited { wait_secs });
    }

    let error_text = response.text().await.unwrap_or_default();
    let message = sanitize_for_logging(&error_text, 200);
    error!("Operation '{}' failed - Status: {}", operation_name, status);
    debug!("Error response for '{}': {}", operation_name, message);
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}
