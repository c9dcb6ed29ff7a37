//! # Tweet Harvest
//!
//! Command-line tool that searches recent posts on Twitter/X matching a keyword
//! and saves posts, authors and places to a CSV file.
//!
//! ## Usage
//!
//! ```bash
//! tweet-harvest <KEYWORD> <OUTPUT_FILE> <BEARER_TOKEN>
//!
//! # With debug logging
//! RUST_LOG=debug tweet-harvest rust posts.csv "$BEARER_TOKEN"
//! ```
//!
//! ## Exit Status
//!
//! `0` whenever the run completes, including when no posts are found, the rate
//! limit is reached or the file cannot be written. Non-zero only if the
//! `xapi_base_url` override is invalid or the API client cannot be initialized.

use clap::Parser;
use log::error;
use std::path::PathBuf;

use tweet_harvest::{run, Error, SearchConfig};

/// Search recent posts by keyword and save them to a CSV file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Keyword to search for
    keyword: String,
    /// Path of the CSV file to write
    output_file: PathBuf,
    /// Bearer Token for the X API
    bearer_token: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize the logging system, defaulting to info level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = SearchConfig::from_env().map_err(|e| {
        report("Failed to load configuration", &e);
        e
    })?;

    match run(&cli.keyword, &cli.output_file, &cli.bearer_token, &config).await {
        Ok(status) => println!("{}", status.message()),
        Err(e) if e.is_fatal() => {
            report("Failed to initialize API client", &e);
            return Err(e.into());
        }
        Err(e) => error!("Run ended early: {}", e),
    }
    Ok(())
}

/// Logs an error, naming the environment variable behind it when known.
fn report(context: &str, e: &Error) {
    error!("{}: {}", context, e);
    if let Error::Config { key: Some(key), .. } = e {
        error!("Check the {} environment variable", key);
    }
}
