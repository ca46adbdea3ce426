//! Output generation for the rendered news page.
//!
//! # Submodules
//!
//! - [`html`]: Full HTML document with the `news-list` and `loading` elements
//! - [`markdown`]: Markdown list for reading in a terminal or a notes app
//! - [`json`]: Page state and entries for machine consumption
//!
//! Every writer works from the finished [`NewsPage`] and the final
//! [`PresenterState`]; none of them touches the network.

use clap::ValueEnum;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use crate::page::NewsPage;
use crate::presenter::PresenterState;

pub mod html;
pub mod json;
pub mod markdown;

/// Document format of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Markdown,
    Json,
}

/// Options that only affect how the page is written out.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// Server the page was loaded from; used as the HTML `<base href>` so
    /// `/news/{id}` links resolve when the file is opened locally.
    pub base_href: Option<String>,
}

/// Render the page in the requested format.
pub fn render_document(
    format: OutputFormat,
    page: &NewsPage,
    state: &PresenterState,
    options: &DocumentOptions,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Html => Ok(html::to_html(page, options)),
        OutputFormat::Markdown => Ok(markdown::to_markdown(page)),
        OutputFormat::Json => json::to_json(page, state),
    }
}

/// Write the document to `path`, or to stdout when no path is given.
///
/// Parent directories of `path` are created as needed.
#[instrument(level = "info", skip_all, fields(path = path.unwrap_or("-")))]
pub async fn write_output(path: Option<&str>, document: &str) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).await?;
                }
            }
            fs::write(path, document).await?;
            info!(bytes = document.len(), "Wrote news page");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(document.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
