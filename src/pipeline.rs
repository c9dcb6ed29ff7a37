//! One search → join → write run.
//!
//! Each stage converts its own failures into an explicit outcome, so only
//! client initialization can make [`run`] return an error.

use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::rows::build_rows;
use crate::twitter::{fetch_posts, SearchOutcome, XClient};
use crate::writer::write_csv;

/// How a run ended. Every variant is a normal completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// Rows were written to the output file
    Written { rows: usize, path: PathBuf },
    /// The search returned no posts (or failed); nothing was written
    NoPosts,
    /// The request quota is exhausted; nothing was joined or written
    RateLimited { wait_secs: u64 },
    /// Posts could not be joined; nothing was written
    TransformFailed,
    /// The output file could not be written
    WriteFailed { path: PathBuf },
}

impl RunStatus {
    /// Console message describing the outcome.
    pub fn message(&self) -> String {
        match self {
            RunStatus::Written { rows, path } => {
                format!("Saved {} posts to: {}", rows, path.display())
            }
            RunStatus::NoPosts => "No posts found.".to_string(),
            RunStatus::RateLimited { wait_secs } => format!(
                "Rate limit reached. Retry after {} seconds. Stopping.",
                wait_secs
            ),
            RunStatus::TransformFailed => {
                "Posts could not be processed; no file written.".to_string()
            }
            RunStatus::WriteFailed { path } => {
                format!("Failed to save posts to: {}", path.display())
            }
        }
    }
}

/// Runs the fetch, join and write stages with an already-built client.
pub async fn run_with_client(client: &XClient, keyword: &str, output_file: &Path) -> RunStatus {
    info!("Searching posts...");
    let results = match fetch_posts(client, keyword, None).await {
        SearchOutcome::Results(results) => results,
        SearchOutcome::RateLimited(limit) => {
            warn!("Stopping before processing: rate limit reached");
            return RunStatus::RateLimited {
                wait_secs: limit.wait_secs,
            };
        }
    };

    if results.is_empty() {
        info!("No posts to process");
        return RunStatus::NoPosts;
    }

    info!("Processing posts...");
    let rows = build_rows(&results);
    if rows.is_empty() {
        return RunStatus::TransformFailed;
    }

    match write_csv(&rows, output_file) {
        Ok(()) => RunStatus::Written {
            rows: rows.len(),
            path: output_file.to_path_buf(),
        },
        Err(e) => {
            error!("Failed to save CSV file {}: {}", output_file.display(), e);
            RunStatus::WriteFailed {
                path: output_file.to_path_buf(),
            }
        }
    }
}

/// Builds the client and runs the whole pipeline.
///
/// # Returns
///
/// - `Ok(RunStatus)`: The run completed (possibly with no output)
/// - `Err(Error::Initialization)`: The client could not be built
pub async fn run(
    keyword: &str,
    output_file: &Path,
    bearer_token: &str,
    config: &SearchConfig,
) -> Result<RunStatus> {
    info!("Initializing API client...");
    let client = XClient::new(bearer_token, config)?;
    Ok(run_with_client(&client, keyword, output_file).await)
}
