//! Renderer stage: turns retained records into list entries.
//!
//! # Link target
//!
//! A non-empty `url` is used as-is and opens in a new tab. Otherwise the
//! entry links to the internal detail route `/news/{id}`.
//!
//! # Metadata line
//!
//! ```text
//! 类型: story · 发布时间: 2023/11/15 06:13:20
//! ```
//!
//! Each clause degrades to its `未知` marker on its own. A bad timestamp only
//! affects its own entry and never stops the rest of the list.

use chrono::TimeZone;
use chrono_tz::Tz;
use serde_json::Value;
use tracing::debug;

use crate::models::{DisplayEntry, NewsItem};
use crate::normalize::RetainedItem;

/// Prefix of the internal per-item detail route.
pub const DETAIL_ROUTE_PREFIX: &str = "/news/";
/// Separator between the metadata clauses.
pub const METADATA_SEPARATOR: &str = " · ";
/// Time clause when the publication time cannot be shown.
pub const UNKNOWN_TIME: &str = "发布时间: 未知";
/// Type clause when the record has no category.
pub const UNKNOWN_TYPE: &str = "类型: 未知";

// Largest timestamp a JavaScript Date can hold, in milliseconds.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Builds [`DisplayEntry`] values, formatting times in one timezone.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    timezone: Tz,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Shanghai)
    }
}

impl Renderer {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Render every retained record, lazily and in order.
    pub fn render_all<'a>(
        &'a self,
        items: &'a [RetainedItem],
    ) -> impl Iterator<Item = DisplayEntry> + 'a {
        items
            .iter()
            .map(|retained| self.render_entry(&retained.item, &retained.display_title))
    }

    pub fn render_entry(&self, item: &NewsItem, display_title: &str) -> DisplayEntry {
        let (href, opens_in_new_tab) = link_target(item);
        DisplayEntry {
            display_title: display_title.to_string(),
            href,
            opens_in_new_tab,
            metadata_line: self.metadata_line(item),
        }
    }

    pub fn metadata_line(&self, item: &NewsItem) -> String {
        let type_clause = match item.kind.as_deref() {
            Some(kind) if !kind.is_empty() => format!("类型: {kind}"),
            _ => UNKNOWN_TYPE.to_string(),
        };
        let time_clause = match item.time.as_ref().and_then(|t| self.format_time(t)) {
            Some(formatted) => format!("发布时间: {formatted}"),
            None => UNKNOWN_TIME.to_string(),
        };
        format!("{type_clause}{METADATA_SEPARATOR}{time_clause}")
    }

    /// Format an epoch-seconds value as `YYYY/M/D HH:MM:SS` in the
    /// renderer's timezone, or `None` when it cannot be interpreted.
    pub fn format_time(&self, raw: &Value) -> Option<String> {
        let Some(millis) = epoch_millis(raw) else {
            debug!(time = %raw, "Publication time is not a usable timestamp");
            return None;
        };
        let Some(datetime) = self.timezone.timestamp_millis_opt(millis).single() else {
            debug!(millis, "Publication time is out of range");
            return None;
        };
        Some(datetime.format("%Y/%-m/%-d %H:%M:%S").to_string())
    }
}

/// Link target and new-tab flag for a record.
pub fn link_target(item: &NewsItem) -> (String, bool) {
    match item.url.as_deref() {
        Some(url) if !url.is_empty() => (url.to_string(), true),
        _ => (
            format!("{DETAIL_ROUTE_PREFIX}{}", item.id.as_deref().unwrap_or_default()),
            false,
        ),
    }
}

// Numbers and numeric strings are seconds; zero counts as absent.
fn epoch_millis(raw: &Value) -> Option<i64> {
    let seconds = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if seconds == 0.0 || !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).trunc();
    if millis.abs() > MAX_EPOCH_MILLIS {
        return None;
    }
    Some(millis as i64)
}
