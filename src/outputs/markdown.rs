//! Markdown page writer.
//!
//! Entries become bullet links with the metadata line underneath:
//!
//! ```text
//! # Hacker News 中文版
//!
//! - [标题](/news/1)
//!   类型: story · 发布时间: 2023/11/15 06:13:20
//! ```
//!
//! A placeholder message is written as a single italic paragraph. Text from
//! the server is kept on one line with its Markdown syntax escaped.

use std::fmt::Write;

use crate::page::{ListItem, NewsPage};

// Keeps server text on one line and stops it from opening links, emphasis,
// code spans, headings or raw HTML.
fn escape_inline(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() || ch.is_control() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        if matches!(ch, '[' | ']' | '\\' | '*' | '_' | '`' | '#' | '<' | '>') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

// Link destinations in angle brackets may not contain `<`, `>` or line breaks.
fn escape_destination(s: &str) -> String {
    s.replace('<', "%3C")
        .replace('>', "%3E")
        .replace('\n', "%0A")
        .replace('\r', "%0D")
}

/// Render the page as Markdown.
pub fn to_markdown(page: &NewsPage) -> String {
    let mut md = String::from("# Hacker News 中文版\n\n");
    for item in page.items() {
        match item {
            ListItem::Entry(entry) => {
                writeln!(
                    md,
                    "- [{}](<{}>)\n  {}",
                    escape_inline(&entry.display_title),
                    escape_destination(&entry.href),
                    escape_inline(&entry.metadata_line)
                )
                .unwrap();
            }
            ListItem::Message(message) => {
                writeln!(md, "_{}_", escape_inline(message)).unwrap();
            }
        }
    }
    md
}
