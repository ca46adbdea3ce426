//! Normalizer stage: retention filtering and display title derivation.
//!
//! A record is kept when at least one of its two titles has non-whitespace
//! content. Dropping a record is expected, not an error, so it is only counted.
//! The result keeps "the server sent nothing" apart from "the server sent
//! only unusable records" because the page shows different messages for them.

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::models::NewsItem;
use crate::utils::non_blank;

/// Title used when neither headline is usable.
pub const UNTITLED_PLACEHOLDER: &str = "无标题新闻";

/// A record that passed retention, paired with its derived headline.
#[derive(Debug, Clone, PartialEq)]
pub struct RetainedItem {
    pub item: NewsItem,
    pub display_title: String,
}

/// Outcome of normalizing one fetched collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// The fetched array was empty.
    EmptySource,
    /// Records were fetched but none had a usable title.
    AllFiltered { dropped: usize },
    /// At least one record was kept; source order is preserved.
    Retained(Vec<RetainedItem>),
}

/// Whether `item` has a usable headline.
pub fn is_retained(item: &NewsItem) -> bool {
    non_blank(item.title_zh.as_deref()).is_some() || non_blank(item.title_en.as_deref()).is_some()
}

/// Derive the headline: trimmed Chinese title, else trimmed English title,
/// else [`UNTITLED_PLACEHOLDER`].
pub fn display_title(item: &NewsItem) -> String {
    non_blank(item.title_zh.as_deref())
        .or_else(|| non_blank(item.title_en.as_deref()))
        .unwrap_or(UNTITLED_PLACEHOLDER)
        .to_string()
}

/// Filter the raw records and derive a headline for each kept one.
#[instrument(level = "info", skip_all, fields(total = records.len()))]
pub fn normalize(records: Vec<Value>) -> Normalized {
    if records.is_empty() {
        info!("News collection is empty");
        return Normalized::EmptySource;
    }

    let total = records.len();
    let retained: Vec<RetainedItem> = records
        .into_iter()
        .map(NewsItem::from_value)
        .filter(is_retained)
        .map(|item| RetainedItem {
            display_title: display_title(&item),
            item,
        })
        .collect();

    let dropped = total - retained.len();
    if dropped > 0 {
        debug!(dropped, "Dropped records without a usable title");
    }
    info!(valid = retained.len(), "Valid news records");

    if retained.is_empty() {
        Normalized::AllFiltered { dropped }
    } else {
        Normalized::Retained(retained)
    }
}
