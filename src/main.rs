//! # cnews_feed
//!
//! Renders the latest translated Hacker News items served by a cnews server
//! into a news page, handling absent, partial or malformed records without
//! ever failing the page.
//!
//! ## Usage
//!
//! ```sh
//! cnews_feed -b http://localhost:8080 -o ./public/index.html
//! ```
//!
//! ## Architecture
//!
//! One pass, no state kept between runs:
//! 1. **Loading**: `GET /api/news` once ([`api`])
//! 2. **Normalizing**: Drop records without a usable title ([`normalize`])
//! 3. **Rendering**: Build a link and metadata line per record ([`render`])
//! 4. **Presenting**: Exactly one of list, empty message or error message ([`presenter`])
//!
//! The finished page is then written as HTML, Markdown or JSON ([`outputs`]).

use clap::Parser;
use reqwest::Client;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod models;
mod normalize;
mod outputs;
mod page;
mod pipeline;
mod presenter;
mod render;
mod utils;

use api::HttpNewsSource;
use cli::Cli;
use config::{FeedConfig, Settings};
use outputs::DocumentOptions;
use page::NewsPage;
use presenter::PresenterState;
use render::Renderer;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    // Parse CLI and config
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");
    let file_config = match &args.config {
        Some(path) => FeedConfig::load(PathBuf::from(path)).await?,
        None => FeedConfig::default(),
    };
    let settings = Settings::resolve(&args, file_config)?;
    info!(
        base_url = %settings.base_url,
        timezone = ?settings.timezone,
        format = ?settings.format,
        "Resolved settings"
    );

    // ---- Load, normalize, render ----
    let source = HttpNewsSource::new(Client::new(), &settings.base_url)?;
    debug!(endpoint = %source.endpoint(), "News endpoint");
    let renderer = Renderer::new(settings.timezone);
    let (page, state) = pipeline::run(&source, &renderer, NewsPage::new())
        .await
        .into_parts();

    match &state {
        PresenterState::Failed { message } => warn!(%message, "Page shows the load failure"),
        other => info!(state = ?other, "Page ready"),
    }

    // ---- Output ----
    let options = DocumentOptions {
        base_href: Some(settings.base_url.to_string()),
    };
    let document = outputs::render_document(settings.format, &page, &state, &options)?;
    outputs::write_output(settings.output.as_deref(), &document).await?;

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}
