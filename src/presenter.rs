//! Presenter stage: the loading indicator and the end-of-run page state.
//!
//! The page starts in [`PresenterState::Loading`] and moves to exactly one
//! terminal state per run. Every terminal transition hides the loading
//! indicator. Once terminal, further transitions are refused, so two end
//! states are never visible together and nothing returns to `Loading`.

use serde::Serialize;
use tracing::{info, warn};

use crate::models::DisplayEntry;

/// Shown when the server returned an empty collection.
pub const EMPTY_SOURCE_MESSAGE: &str = "暂无新闻数据，请稍后再试";
/// Shown when every fetched record lacked a usable title.
pub const EMPTY_AFTER_FILTER_MESSAGE: &str = "暂无有效的新闻数据，请稍后再试";
/// Prefix of the message shown when loading failed.
pub const FAILED_MESSAGE_PREFIX: &str = "加载失败";

/// The two page containers the pipeline writes to.
pub trait FeedView {
    /// Hide the loading indicator.
    fn hide_loading(&mut self);
    /// Replace the whole list content with a single message item.
    fn show_message(&mut self, message: &str);
    /// Append one entry to the end of the list.
    fn append_entry(&mut self, entry: &DisplayEntry);
}

/// Visible outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PresenterState {
    Loading,
    Rendered { count: usize },
    EmptySource,
    EmptyAfterFilter { dropped: usize },
    Failed { message: String },
}

impl PresenterState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PresenterState::Loading)
    }
}

/// Owns the page containers for the duration of a run.
#[derive(Debug)]
pub struct Presenter<V> {
    view: V,
    state: PresenterState,
}

impl<V: FeedView> Presenter<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: PresenterState::Loading,
        }
    }

    pub fn state(&self) -> &PresenterState {
        &self.state
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Hand the page back together with the final state.
    pub fn into_parts(self) -> (V, PresenterState) {
        (self.view, self.state)
    }

    /// Hide the indicator and append the rendered entries in order.
    pub fn show_entries<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = DisplayEntry>,
    {
        if !self.begin_terminal("rendered") {
            return false;
        }
        let mut count = 0;
        for entry in entries {
            self.view.append_entry(&entry);
            count += 1;
        }
        info!(count, "Rendered news list");
        self.state = PresenterState::Rendered { count };
        true
    }

    pub fn show_empty_source(&mut self) -> bool {
        if !self.begin_terminal("empty_source") {
            return false;
        }
        self.view.show_message(EMPTY_SOURCE_MESSAGE);
        self.state = PresenterState::EmptySource;
        true
    }

    pub fn show_empty_after_filter(&mut self, dropped: usize) -> bool {
        if !self.begin_terminal("empty_after_filter") {
            return false;
        }
        self.view.show_message(EMPTY_AFTER_FILTER_MESSAGE);
        self.state = PresenterState::EmptyAfterFilter { dropped };
        true
    }

    pub fn show_failure(&mut self, message: &str) -> bool {
        if !self.begin_terminal("failed") {
            return false;
        }
        self.view.show_message(&format!("{FAILED_MESSAGE_PREFIX}: {message}"));
        self.state = PresenterState::Failed {
            message: message.to_string(),
        };
        true
    }

    fn begin_terminal(&mut self, target: &str) -> bool {
        if self.state.is_terminal() {
            warn!(current = ?self.state, target, "Ignoring transition out of a terminal page state");
            return false;
        }
        self.view.hide_loading();
        true
    }
}
