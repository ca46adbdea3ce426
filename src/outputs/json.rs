//! JSON page writer.
//!
//! The document carries the final page state next to the rendered entries:
//!
//! ```text
//! {
//!   "state": { "state": "rendered", "count": 1 },
//!   "loading_visible": false,
//!   "message": null,
//!   "entries": [ { "display_title": "…", "href": "…", … } ]
//! }
//! ```

use serde::Serialize;

use crate::models::DisplayEntry;
use crate::page::NewsPage;
use crate::presenter::PresenterState;

#[derive(Debug, Serialize)]
struct PageDocument<'a> {
    state: &'a PresenterState,
    loading_visible: bool,
    message: Option<&'a str>,
    entries: Vec<&'a DisplayEntry>,
}

/// Serialize the page and its state as pretty-printed JSON.
pub fn to_json(page: &NewsPage, state: &PresenterState) -> Result<String, serde_json::Error> {
    let document = PageDocument {
        state,
        loading_visible: page.loading_visible(),
        message: page.message(),
        entries: page.entries().collect(),
    };
    serde_json::to_string_pretty(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::FeedView;
    use serde_json::{Value, json};

    #[test]
    fn test_rendered_document() {
        let mut page = NewsPage::new();
        page.hide_loading();
        page.append_entry(&DisplayEntry {
            display_title: "标题".to_string(),
            href: "/news/1".to_string(),
            opens_in_new_tab: false,
            metadata_line: "类型: tech · 发布时间: 未知".to_string(),
        });

        let out = to_json(&page, &PresenterState::Rendered { count: 1 }).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["state"], json!({"state": "rendered", "count": 1}));
        assert_eq!(value["loading_visible"], json!(false));
        assert_eq!(value["message"], Value::Null);
        assert_eq!(value["entries"][0]["href"], json!("/news/1"));
    }

    #[test]
    fn test_failed_document() {
        let mut page = NewsPage::new();
        page.hide_loading();
        page.show_message("加载失败: 网络错误 (HTTP 502)");
        let state = PresenterState::Failed {
            message: "网络错误 (HTTP 502)".to_string(),
        };

        let value: Value = serde_json::from_str(&to_json(&page, &state).unwrap()).unwrap();
        assert_eq!(value["state"]["state"], json!("failed"));
        assert_eq!(value["message"], json!("加载失败: 网络错误 (HTTP 502)"));
        assert_eq!(value["entries"], json!([]));
    }
}
