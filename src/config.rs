//! Runtime configuration: built-in defaults, an optional YAML file, then CLI
//! flags and environment variables, in increasing order of precedence.
//!
//! # File format
//!
//! ```yaml
//! base_url: http://news.example.com:8080
//! timezone: Asia/Shanghai
//! format: html
//! output: ./public/index.html
//! ```
//!
//! Every key is optional.

use chrono_tz::Tz;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::api::NEWS_ENDPOINT_PATH;
use crate::cli::Cli;
use crate::outputs::OutputFormat;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid base URL {0:?}: {1}")]
    BaseUrl(String, #[source] url::ParseError),

    #[error("unknown timezone {0:?}")]
    Timezone(String),
}

/// Contents of the optional YAML config file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    pub base_url: Option<String>,
    pub timezone: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<String>,
}

impl FeedConfig {
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
        let config = Self::from_yaml(&text).map_err(|source| ConfigError::Yaml { path, source })?;
        debug!(?config, "Loaded config file");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        // an empty file is a valid, empty config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: Url,
    pub timezone: Tz,
    pub format: OutputFormat,
    pub output: Option<String>,
}

impl Settings {
    /// Merge CLI arguments over the file config over built-in defaults.
    pub fn resolve(cli: &Cli, file: FeedConfig) -> Result<Self, ConfigError> {
        let base_url = cli
            .base_url
            .clone()
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timezone = cli
            .timezone
            .clone()
            .or(file.timezone)
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());

        let parsed = Url::parse(&base_url).map_err(|e| ConfigError::BaseUrl(base_url.clone(), e))?;
        // urls like `mailto:x` parse but cannot carry the endpoint path
        parsed
            .join(NEWS_ENDPOINT_PATH)
            .map_err(|e| ConfigError::BaseUrl(base_url.clone(), e))?;

        Ok(Self {
            base_url: parsed,
            timezone: timezone
                .parse::<Tz>()
                .map_err(|_| ConfigError::Timezone(timezone.clone()))?,
            format: cli.format.or(file.format).unwrap_or_default(),
            output: cli.output.clone().or(file.output),
        })
    }
}
