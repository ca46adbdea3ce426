//! In-memory page holding the two containers the pipeline writes to.
//!
//! [`NewsPage`] stands in for the `news-list` list element and the `loading`
//! indicator. The writers in [`crate::outputs`] turn it into a document.

use crate::models::DisplayEntry;
use crate::presenter::FeedView;

/// Element id of the news list container.
pub const LIST_ELEMENT_ID: &str = "news-list";
/// Element id of the loading indicator.
pub const LOADING_ELEMENT_ID: &str = "loading";

/// One child of the list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Entry(DisplayEntry),
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsPage {
    loading_visible: bool,
    items: Vec<ListItem>,
}

impl Default for NewsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsPage {
    /// A fresh page: loading indicator shown, list empty.
    pub fn new() -> Self {
        Self {
            loading_visible: true,
            items: Vec::new(),
        }
    }

    pub fn loading_visible(&self) -> bool {
        self.loading_visible
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn entries(&self) -> impl Iterator<Item = &DisplayEntry> {
        self.items.iter().filter_map(|item| match item {
            ListItem::Entry(entry) => Some(entry),
            ListItem::Message(_) => None,
        })
    }

    /// The placeholder message, if the list currently shows one.
    pub fn message(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            ListItem::Message(message) => Some(message.as_str()),
            ListItem::Entry(_) => None,
        })
    }
}

impl FeedView for NewsPage {
    fn hide_loading(&mut self) {
        self.loading_visible = false;
    }

    fn show_message(&mut self, message: &str) {
        self.items = vec![ListItem::Message(message.to_string())];
    }

    fn append_entry(&mut self, entry: &DisplayEntry) {
        self.items.push(ListItem::Entry(entry.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> DisplayEntry {
        DisplayEntry {
            display_title: title.to_string(),
            href: "/news/1".to_string(),
            opens_in_new_tab: false,
            metadata_line: "类型: 未知 · 发布时间: 未知".to_string(),
        }
    }

    #[test]
    fn test_new_page_is_loading() {
        let page = NewsPage::new();
        assert!(page.loading_visible());
        assert!(page.items().is_empty());
        assert_eq!(page.message(), None);
    }

    #[test]
    fn test_append_keeps_order() {
        let mut page = NewsPage::new();
        page.append_entry(&entry("a"));
        page.append_entry(&entry("b"));
        let titles: Vec<&str> = page.entries().map(|e| e.display_title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn test_message_replaces_list() {
        let mut page = NewsPage::new();
        page.append_entry(&entry("a"));
        page.show_message("加载失败: boom");
        assert_eq!(page.items(), &[ListItem::Message("加载失败: boom".to_string())]);
        assert_eq!(page.entries().count(), 0);
        assert_eq!(page.message(), Some("加载失败: boom"));
    }
}
