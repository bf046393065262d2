//! # Time Latest Stories
//!
//! A small JSON API that scrapes the "LATEST STORIES" list off the
//! Time.com homepage on demand and serves it as an array of
//! `{title, link}` records.
//!
//! ## Architecture
//!
//! Each request runs a short pipeline:
//! 1. **Fetch**: download the homepage HTML, following redirects under
//!    an explicit hop budget
//! 2. **Locate**: narrow the document to the region most likely to hold
//!    the story list, with bounded fallbacks
//! 3. **Scan**: walk the region's anchors through an ordered filter
//!    pipeline, collecting plausible article links in document order
//! 4. **Serve**: pretty-print the accepted stories as JSON
//!
//! The extraction steps are pure string functions with no I/O, so the
//! heuristics are tested against static fixtures without the network.
//!
//! ## Usage
//!
//! ```sh
//! time_latest_stories --port 3000
//! curl localhost:3000/getTimeStories
//! ```

use clap::Parser;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;
mod extract;
mod fetch;
mod models;
mod server;

use cli::Cli;
use server::AppState;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!("time_latest_stories starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Relative story links get rewritten against the source's origin.
    let source = Url::parse(&args.source_url)?;
    let origin = source.origin().ascii_serialization();

    let client = fetch::build_client(Duration::from_secs(args.fetch_timeout_secs))?;
    let state = Arc::new(AppState {
        client,
        source_url: args.source_url,
        origin,
        story_count: args.story_count,
        max_redirects: args.max_redirects,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, source = %state.source_url, "Server running");

    axum::serve(listener, server::router(state)).await?;
    Ok(())
}
