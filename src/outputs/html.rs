//! HTML page writer.
//!
//! # Structure
//!
//! ```text
//! <div id="loading" style="display: none">正在加载新闻...</div>
//! <ul id="news-list">
//!   <li class="news-item">
//!     <h2><a href="…" target="_blank">title</a></h2>
//!     <div class="news-meta">类型: story · 发布时间: 2023/11/15 06:13:20</div>
//!   </li>
//! </ul>
//! ```
//!
//! Placeholder messages are a bare `<li class="news-item">` with the text.
//! Every value coming from the server is escaped.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use super::DocumentOptions;
use crate::models::DisplayEntry;
use crate::page::{LIST_ELEMENT_ID, LOADING_ELEMENT_ID, ListItem, NewsPage};

const PAGE_TITLE: &str = "Hacker News 中文版";
const LOADING_TEXT: &str = "正在加载新闻...";

/// Render the page as a standalone HTML document.
pub fn to_html(page: &NewsPage, options: &DocumentOptions) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n<meta charset=\"utf-8\">\n");
    if let Some(base) = &options.base_href {
        writeln!(html, "<base href=\"{}\">", encode_double_quoted_attribute(base)).unwrap();
    }
    writeln!(html, "<title>{PAGE_TITLE}</title>\n</head>\n<body>").unwrap();
    writeln!(html, "<h1>{PAGE_TITLE}</h1>").unwrap();

    let loading_style = if page.loading_visible() {
        ""
    } else {
        " style=\"display: none\""
    };
    writeln!(
        html,
        "<div id=\"{LOADING_ELEMENT_ID}\"{loading_style}>{LOADING_TEXT}</div>"
    )
    .unwrap();

    writeln!(html, "<ul id=\"{LIST_ELEMENT_ID}\">").unwrap();
    for item in page.items() {
        match item {
            ListItem::Entry(entry) => write_entry(&mut html, entry),
            ListItem::Message(message) => {
                writeln!(html, "<li class=\"news-item\">{}</li>", encode_text(message)).unwrap();
            }
        }
    }
    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

fn write_entry(html: &mut String, entry: &DisplayEntry) {
    let target = if entry.opens_in_new_tab {
        " target=\"_blank\""
    } else {
        ""
    };
    writeln!(
        html,
        "<li class=\"news-item\">\n<h2><a href=\"{}\"{target}>{}</a></h2>\n<div class=\"news-meta\">{}</div>\n</li>",
        encode_double_quoted_attribute(&entry.href),
        encode_text(&entry.display_title),
        encode_text(&entry.metadata_line),
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::FeedView;
    use scraper::{Html, Selector};

    fn entry(title: &str, href: &str, new_tab: bool) -> DisplayEntry {
        DisplayEntry {
            display_title: title.to_string(),
            href: href.to_string(),
            opens_in_new_tab: new_tab,
            metadata_line: "类型: story · 发布时间: 未知".to_string(),
        }
    }

    fn select<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector).collect()
    }

    #[test]
    fn test_entries_render_as_links() {
        let mut page = NewsPage::new();
        page.hide_loading();
        page.append_entry(&entry("外部", "https://example.com/a", true));
        page.append_entry(&entry("内部", "/news/7", false));

        let doc = Html::parse_document(&to_html(&page, &DocumentOptions::default()));
        let links = select(&doc, "#news-list li.news-item h2 a");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].value().attr("href"), Some("https://example.com/a"));
        assert_eq!(links[0].value().attr("target"), Some("_blank"));
        assert_eq!(links[0].text().collect::<String>(), "外部");
        assert_eq!(links[1].value().attr("href"), Some("/news/7"));
        assert_eq!(links[1].value().attr("target"), None);

        let meta = select(&doc, "#news-list .news-meta");
        assert_eq!(meta[0].text().collect::<String>(), "类型: story · 发布时间: 未知");
    }

    #[test]
    fn test_loading_indicator_visibility() {
        let page = NewsPage::new();
        let doc = Html::parse_document(&to_html(&page, &DocumentOptions::default()));
        assert_eq!(select(&doc, "#loading")[0].value().attr("style"), None);

        let mut page = NewsPage::new();
        page.hide_loading();
        let doc = Html::parse_document(&to_html(&page, &DocumentOptions::default()));
        assert_eq!(
            select(&doc, "#loading")[0].value().attr("style"),
            Some("display: none")
        );
    }

    #[test]
    fn test_message_item() {
        let mut page = NewsPage::new();
        page.hide_loading();
        page.show_message("加载失败: <boom>");

        let html = to_html(&page, &DocumentOptions::default());
        assert!(html.contains("加载失败: &lt;boom&gt;"));

        let doc = Html::parse_document(&html);
        let items = select(&doc, "#news-list li.news-item");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text().collect::<String>(), "加载失败: <boom>");
        assert!(select(&doc, "#news-list a").is_empty());
    }

    #[test]
    fn test_item_data_is_escaped() {
        let mut page = NewsPage::new();
        page.append_entry(&entry(
            "<script>alert(1)</script>",
            "https://example.com/?a=1&b=\"2\"",
            true,
        ));

        let html = to_html(&page, &DocumentOptions::default());
        assert!(!html.contains("<script>"));

        let doc = Html::parse_document(&html);
        let links = select(&doc, "#news-list a");
        assert_eq!(links[0].value().attr("href"), Some("https://example.com/?a=1&b=\"2\""));
        assert_eq!(links[0].text().collect::<String>(), "<script>alert(1)</script>");
    }

    #[test]
    fn test_base_href() {
        let options = DocumentOptions {
            base_href: Some("http://localhost:8080/".to_string()),
        };
        let doc = Html::parse_document(&to_html(&NewsPage::new(), &options));
        assert_eq!(
            select(&doc, "base")[0].value().attr("href"),
            Some("http://localhost:8080/")
        );
    }

    #[test]
    fn test_base_href_attribute_is_escaped() {
        let options = DocumentOptions {
            base_href: Some("http://localhost:8080/?q=\"x\"&y=<1>".to_string()),
        };
        let html = to_html(&NewsPage::new(), &options);
        assert!(!html.contains("\"x\""));

        let doc = Html::parse_document(&html);
        assert_eq!(
            select(&doc, "base")[0].value().attr("href"),
            Some("http://localhost:8080/?q=\"x\"&y=<1>")
        );
    }
}
