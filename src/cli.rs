//! Command-line interface definitions for cnews_feed.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Server and timezone can also come from environment variables or the
//! YAML config file; flags win over both.

use clap::Parser;

use crate::outputs::OutputFormat;

/// Render the latest translated news as a page.
///
/// # Examples
///
/// ```sh
/// # HTML page on stdout from a local server
/// cnews_feed
///
/// # Markdown from another server, written to a file
/// cnews_feed -b http://news.example.com:8080 -f markdown -o news.md
///
/// # Settings from a config file
/// cnews_feed -c ./cnews_feed.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// News server base URL; the collection is read from <base-url>/api/news [default: http://localhost:8080]
    #[arg(short, long, env = "NEWS_BASE_URL")]
    pub base_url: Option<String>,

    /// IANA timezone used for publication times [default: Asia/Shanghai]
    #[arg(long, env = "NEWS_TIMEZONE")]
    pub timezone: Option<String>,

    /// Output document format [default: html]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file; the page is written to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "cnews_feed",
            "--config",
            "./feed.yaml",
            "--base-url",
            "http://localhost:9000",
            "--timezone",
            "UTC",
            "--format",
            "json",
            "--output",
            "./out/news.json",
        ]);

        assert_eq!(cli.config.as_deref(), Some("./feed.yaml"));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.output.as_deref(), Some("./out/news.json"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "cnews_feed",
            "-c",
            "/tmp/feed.yaml",
            "-b",
            "http://news.example.com",
            "-f",
            "markdown",
            "-o",
            "/tmp/news.md",
        ]);

        assert_eq!(cli.config.as_deref(), Some("/tmp/feed.yaml"));
        assert_eq!(cli.base_url.as_deref(), Some("http://news.example.com"));
        assert_eq!(cli.format, Some(OutputFormat::Markdown));
        assert_eq!(cli.output.as_deref(), Some("/tmp/news.md"));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["cnews_feed", "-f", "pdf"]).is_err());
    }
}
