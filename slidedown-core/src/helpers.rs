//! Small string helpers shared by templates and handlers.

use unicode_segmentation::UnicodeSegmentation;

pub fn is_markdown(filename: &str) -> bool {
    filename.ends_with(".md")
}

pub fn is_wiki(filename: &str) -> bool {
    filename.ends_with(".wiki")
}

pub fn is_html(filename: &str) -> bool {
    filename.ends_with(".htm") || filename.ends_with(".html")
}

/// First `n` grapheme clusters of `text`
pub fn cut(text: &str, n: usize) -> &str {
    match text.grapheme_indices(true).nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Text up to the first space
pub fn first_word(text: &str) -> &str {
    text.split(' ').next().unwrap_or(text)
}

/// Minimal HTML escaping for text interpolated into hand-built markup
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
