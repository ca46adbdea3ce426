//! Loader stage: one request to the news collection endpoint.
//!
//! The module uses a trait-based design so the pipeline does not care where
//! the records come from:
//! - [`NewsSource`]: Core trait returning the raw record array
//! - [`HttpNewsSource`]: Fetches `GET {base_url}/api/news` with `reqwest`
//!
//! # Failure classification
//!
//! | Outcome | Error |
//! |---------|-------|
//! | Non-success HTTP status | [`LoadError::Status`] |
//! | Connection or body read failure | [`LoadError::Transport`] |
//! | Body is not JSON | [`LoadError::Parse`] |
//! | Body is JSON but not an array | [`LoadError::NotAList`] |
//!
//! Empty-ish bodies (`null`, `false`, `0`, `""`) read as an empty collection.
//!
//! All four end in the same failed page state. There is no retry and no
//! request timeout.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::utils::truncate_for_log;

/// Fixed path of the news collection, resolved against the server base URL.
pub const NEWS_ENDPOINT_PATH: &str = "/api/news";

/// Why the news collection could not be loaded.
///
/// The `Display` text is what the failed page shows after `加载失败: `.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("网络错误 (HTTP {})", .0.as_u16())]
    Status(StatusCode),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("响应不是新闻列表 (JSON {0})")]
    NotAList(&'static str),
}

/// Source of the raw news record array.
pub trait NewsSource {
    /// Fetch the collection once.
    ///
    /// # Returns
    ///
    /// The raw array elements in source order. A JSON `null`, `false`, `0`
    /// or `""` body yields an empty vector.
    async fn fetch_news(&self) -> Result<Vec<Value>, LoadError>;
}

/// Loads the collection from a news server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpNewsSource {
    client: Client,
    endpoint: Url,
}

impl HttpNewsSource {
    /// Create a source for the server at `base_url`.
    ///
    /// The endpoint path is absolute, so any path on `base_url` is replaced.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let base = Url::parse("http://localhost:8080")?;
    /// let source = HttpNewsSource::new(Client::new(), &base)?;
    /// assert_eq!(source.endpoint().as_str(), "http://localhost:8080/api/news");
    /// ```
    pub fn new(client: Client, base_url: &Url) -> Result<Self, url::ParseError> {
        let endpoint = base_url.join(NEWS_ENDPOINT_PATH)?;
        Ok(Self { client, endpoint })
    }

    /// The fully resolved collection URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl NewsSource for HttpNewsSource {
    #[instrument(level = "info", skip_all, fields(endpoint = %self.endpoint))]
    async fn fetch_news(&self) -> Result<Vec<Value>, LoadError> {
        let t0 = Instant::now();
        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, elapsed_ms = t0.elapsed().as_millis(), "News endpoint returned an error status");
            return Err(LoadError::Status(status));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), preview = %truncate_for_log(&body, 200), "Received news body");
        let records = parse_collection(&body)?;
        info!(
            count = records.len(),
            elapsed_ms = t0.elapsed().as_millis(),
            "Fetched news records"
        );
        Ok(records)
    }
}

/// Parse a response body into the raw record array.
///
/// # Errors
///
/// [`LoadError::Parse`] for invalid JSON, [`LoadError::NotAList`] for any
/// other non-array JSON value (objects, `true`, non-zero numbers,
/// non-empty strings).
pub fn parse_collection(body: &str) -> Result<Vec<Value>, LoadError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(records) => Ok(records),
        Value::Null | Value::Bool(false) => Ok(Vec::new()),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(Vec::new()),
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        Value::Object(_) => Err(LoadError::NotAList("object")),
        Value::String(_) => Err(LoadError::NotAList("string")),
        Value::Number(_) => Err(LoadError::NotAList("number")),
        Value::Bool(true) => Err(LoadError::NotAList("boolean")),
    }
}
