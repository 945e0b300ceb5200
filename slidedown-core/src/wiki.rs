//! Wiki markup rendering capability and a Creole-flavoured renderer.

use crate::assemble::wrap_head_and_foot;
use crate::helpers::html_escape;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WikiError {
    #[error("Preformatted block opened on line {line} is never closed")]
    UnterminatedNowiki { line: usize },
}

/// Converts wiki markup to HTML; may fail on malformed input.
pub trait WikiRenderer: Send + Sync {
    fn render(&self, text: &str) -> Result<String, WikiError>;
}

/// Render a wiki document as a full page.
///
/// Any successful conversion is wrapped in the page skeleton, even an empty
/// one. A failed conversion is logged and yields an empty string.
pub fn render_wiki_page(renderer: &dyn WikiRenderer, filename: &str, text: &str) -> String {
    match renderer.render(text) {
        Ok(html) => wrap_head_and_foot(filename, &html),
        Err(e) => {
            tracing::warn!("Wiki conversion failed: {}", e);
            String::new()
        }
    }
}

/// Renderer for a practical subset of WikiCreole 1.0
#[derive(Debug, Default, Clone, Copy)]
pub struct CreoleRenderer;

impl CreoleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl WikiRenderer for CreoleRenderer {
    fn render(&self, text: &str) -> Result<String, WikiError> {
        let mut out = BlockWriter::default();
        let mut lines = text.lines().enumerate();

        while let Some((idx, line)) = lines.next() {
            let trimmed = line.trim();

            if trimmed == "{{{" {
                out.close_blocks();
                let mut pre = Vec::new();
                let mut closed = false;
                for (_, inner) in lines.by_ref() {
                    if inner.trim() == "}}}" {
                        closed = true;
                        break;
                    }
                    pre.push(html_escape(inner));
                }
                if !closed {
                    return Err(WikiError::UnterminatedNowiki { line: idx + 1 });
                }
                out.html.push_str("<pre>");
                out.html.push_str(&pre.join("\n"));
                out.html.push_str("</pre>\n");
            } else if trimmed.is_empty() {
                out.close_blocks();
            } else if trimmed.starts_with('=') {
                out.close_blocks();
                let level = trimmed.chars().take_while(|c| *c == '=').count().min(6);
                let content = trimmed.trim_start_matches('=').trim_end_matches('=').trim();
                out.html.push_str(&format!(
                    "<h{level}>{}</h{level}>\n",
                    render_inline(content)
                ));
            } else if trimmed.len() >= 4 && trimmed.chars().all(|c| c == '-') {
                out.close_blocks();
                out.html.push_str("<hr />\n");
            } else if let Some((kind, depth, item)) = list_item(trimmed) {
                out.close_paragraph();
                out.list_item(kind, depth, &render_inline(item));
            } else {
                out.close_lists();
                out.paragraph.push(render_inline(trimmed));
            }
        }

        out.close_blocks();
        Ok(out.html)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(&self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// `* item`, `## item` and so on; the marker must be followed by a space.
fn list_item(line: &str) -> Option<(ListKind, usize, &str)> {
    let marker = line.chars().next()?;
    let kind = match marker {
        '*' => ListKind::Unordered,
        '#' => ListKind::Ordered,
        _ => return None,
    };
    let depth = line.chars().take_while(|c| *c == marker).count();
    let rest = &line[depth..];
    rest.strip_prefix(' ')
        .map(|item| (kind, depth, item.trim()))
}

#[derive(Default)]
struct BlockWriter {
    html: String,
    paragraph: Vec<String>,
    // (kind, item open) per nesting level
    lists: Vec<(ListKind, bool)>,
}

impl BlockWriter {
    fn close_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            self.html.push_str("<p>");
            self.html.push_str(&self.paragraph.join("\n"));
            self.html.push_str("</p>\n");
            self.paragraph.clear();
        }
    }

    fn pop_list(&mut self) {
        if let Some((kind, item_open)) = self.lists.pop() {
            if item_open {
                self.html.push_str("</li>");
            }
            self.html.push_str(&format!("</{}>\n", kind.tag()));
        }
    }

    fn close_lists(&mut self) {
        while !self.lists.is_empty() {
            self.pop_list();
        }
    }

    fn close_blocks(&mut self) {
        self.close_paragraph();
        self.close_lists();
    }

    fn list_item(&mut self, kind: ListKind, depth: usize, content: &str) {
        while self.lists.len() > depth {
            self.pop_list();
        }
        if self.lists.len() == depth && self.lists.last().map(|(k, _)| *k) != Some(kind) {
            self.pop_list();
        }
        if self.lists.len() == depth {
            if let Some(top) = self.lists.last_mut() {
                if top.1 {
                    self.html.push_str("</li>\n");
                    top.1 = false;
                }
            }
        }
        while self.lists.len() < depth {
            if let Some(top) = self.lists.last_mut() {
                if !top.1 {
                    self.html.push_str("<li>");
                    top.1 = true;
                }
            }
            let level_kind = if self.lists.len() + 1 == depth {
                kind
            } else {
                ListKind::Unordered
            };
            self.html.push_str(&format!("<{}>\n", level_kind.tag()));
            self.lists.push((level_kind, false));
        }

        self.html.push_str("<li>");
        self.html.push_str(content);
        if let Some(top) = self.lists.last_mut() {
            top.1 = true;
        }
    }
}

/// Inline markup: links, inline nowiki, bold, italics, breaks, escapes.
fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut open: Vec<&'static str> = Vec::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("[[") {
            if let Some(end) = after.find("]]") {
                out.push_str(&render_link(&after[..end]));
                rest = &after[end + 2..];
                continue;
            }
        }
        if let Some(after) = rest.strip_prefix("{{{") {
            if let Some(end) = after.find("}}}") {
                out.push_str("<tt>");
                out.push_str(&html_escape(&after[..end]));
                out.push_str("</tt>");
                rest = &after[end + 3..];
                continue;
            }
        }
        if let Some(after) = rest.strip_prefix("**") {
            toggle(&mut out, &mut open, "strong");
            rest = after;
            continue;
        }
        if let Some(after) = rest.strip_prefix("//") {
            // Leave the slashes of bare URLs alone
            if !out.ends_with(':') {
                toggle(&mut out, &mut open, "em");
                rest = after;
                continue;
            }
        }
        if let Some(after) = rest.strip_prefix("\\\\") {
            out.push_str("<br />");
            rest = after;
            continue;
        }
        if let Some(after) = rest.strip_prefix('~') {
            if let Some(escaped) = after.chars().next() {
                out.push_str(&html_escape(&escaped.to_string()));
                rest = &after[escaped.len_utf8()..];
                continue;
            }
        }

        out.push_str(&html_escape(&c.to_string()));
        rest = &rest[c.len_utf8()..];
    }

    while let Some(tag) = open.pop() {
        out.push_str(&format!("</{tag}>"));
    }
    out
}

fn toggle(out: &mut String, open: &mut Vec<&'static str>, tag: &'static str) {
    if open.contains(&tag) {
        while let Some(top) = open.pop() {
            out.push_str(&format!("</{top}>"));
            if top == tag {
                break;
            }
        }
    } else {
        out.push_str(&format!("<{tag}>"));
        open.push(tag);
    }
}

fn render_link(inner: &str) -> String {
    let (target, display) = match inner.split_once('|') {
        Some((target, display)) => (target.trim(), display.trim()),
        None => (inner.trim(), inner.trim()),
    };
    format!(
        "<a href=\"{}\">{}</a>",
        html_escape(target),
        html_escape(display)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        CreoleRenderer::new().render(text).unwrap()
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let html = render("= Title =\n\nFirst line\nsecond line\n\n=== Deep");
        assert_eq!(
            html,
            "<h1>Title</h1>\n<p>First line\nsecond line</p>\n<h3>Deep</h3>\n"
        );
    }

    #[test]
    fn test_inline_markup() {
        assert_eq!(
            render("**bold** and //it// \\\\ [[Home|go home]]"),
            "<p><strong>bold</strong> and <em>it</em> <br /> <a href=\"Home\">go home</a></p>\n"
        );
    }

    #[test]
    fn test_urls_keep_slashes() {
        let html = render("see [[http://example.com]] or http://example.com");
        assert!(html.contains("<a href=\"http://example.com\">http://example.com</a>"));
        assert!(html.contains("or http://example.com"));
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn test_unclosed_inline_closed_at_end() {
        assert_eq!(render("**open"), "<p><strong>open</strong></p>\n");
    }

    #[test]
    fn test_lists() {
        let html = render("* one\n** nested\n* two\n# first");
        assert_eq!(
            html,
            "<ul>\n<li>one<ul>\n<li>nested</li></ul>\n</li>\n<li>two</li></ul>\n<ol>\n<li>first</li></ol>\n"
        );
    }

    #[test]
    fn test_bold_line_is_not_a_list() {
        assert_eq!(render("**not a list**"), "<p><strong>not a list</strong></p>\n");
    }

    #[test]
    fn test_preformatted() {
        let html = render("{{{\n<b>**raw**</b>\n}}}\n----");
        assert_eq!(html, "<pre>&lt;b&gt;**raw**&lt;/b&gt;</pre>\n<hr />\n");
    }

    #[test]
    fn test_escapes_html() {
        assert_eq!(render("a < b & ~**c"), "<p>a &lt; b &amp; **c</p>\n");
    }

    #[test]
    fn test_unterminated_nowiki_fails() {
        let err = CreoleRenderer::new().render("text\n{{{\ncode").unwrap_err();
        assert_eq!(err, WikiError::UnterminatedNowiki { line: 2 });
    }

    #[test]
    fn test_failure_becomes_empty_page() {
        let renderer = CreoleRenderer::new();
        assert_eq!(render_wiki_page(&renderer, "a.wiki", "{{{\nnever closed"), "");

        let page = render_wiki_page(&renderer, "a.wiki", "hi");
        assert!(page.contains("<body>\n <p>hi</p>\n\n</body>"));
    }

    #[test]
    fn test_empty_conversion_keeps_skeleton() {
        let renderer = CreoleRenderer::new();
        assert_eq!(
            render_wiki_page(&renderer, "blank.wiki", ""),
            "<!DOCTYPE html>\n<html>\n\n<title>\n   blank.wiki\n</title>\n<body>\n \n</body>\n</html>\n"
        );
    }
}
