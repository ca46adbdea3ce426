//! Data models for news records and their rendered representations.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsItem`]: One record of the `/api/news` collection, as received
//! - [`DisplayEntry`]: The render-ready form of a retained [`NewsItem`]
//!
//! Records come from an external service and every field is optional. The
//! deserializers here never fail on a field of the wrong JSON type; they
//! treat it as absent instead, so a single odd record cannot sink the batch.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A news record as received from the news endpoint.
///
/// Field names follow the backend's camelCase JSON. Fields the feed does not
/// display (`textEn`, `textZh`, `commentIds`, `createdAt`) are ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Opaque identifier in its textual form; only used for the detail link.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    /// Translated (Chinese) headline.
    #[serde(default, deserialize_with = "lenient_string")]
    pub title_zh: Option<String>,
    /// Original (English) headline.
    #[serde(default, deserialize_with = "lenient_string")]
    pub title_en: Option<String>,
    /// External article link.
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    /// Publication time in epoch seconds, kept raw until rendering.
    #[serde(default)]
    pub time: Option<Value>,
    /// Free-text category label such as `story` or `job`.
    #[serde(default, rename = "type", deserialize_with = "lenient_label")]
    pub kind: Option<String>,
}

impl NewsItem {
    /// Build a record from one element of the fetched array.
    ///
    /// Elements that are not JSON objects (`null`, numbers, strings, ...)
    /// yield a record with every field absent.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// Numbers are kept in textual form; zero and empty strings count as absent.
fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

/// A render-ready list entry derived from a retained [`NewsItem`].
///
/// Never persisted; rebuilt on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    /// Headline shown as the link text. Never empty.
    pub display_title: String,
    /// Link target, either the external URL or the internal detail route.
    pub href: String,
    /// Whether the link opens in a new tab (external links only).
    pub opens_in_new_tab: bool,
    /// The `类型: … · 发布时间: …` line under the headline.
    pub metadata_line: String,
}
