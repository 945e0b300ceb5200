//! Markdown rendering capability.

use pulldown_cmark::{html, Options, Parser};

/// Converts markdown text to HTML. Always succeeds.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}

impl<F> MarkdownRenderer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn render(&self, markdown: &str) -> String {
        self(markdown)
    }
}

/// CommonMark renderer with the usual extensions switched on
pub struct CommonMarkRenderer {
    options: Options,
}

impl CommonMarkRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        options.insert(Options::ENABLE_DEFINITION_LIST);

        Self { options }
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let renderer = CommonMarkRenderer::new();
        let html = renderer.render("Hello\n\nThis is a **test**.");
        assert!(html.contains("<p>Hello</p>"));
        assert!(html.contains("<strong>test</strong>"));
    }

    #[test]
    fn test_lists_render_bare_tags() {
        let renderer = CommonMarkRenderer::new();
        let html = renderer.render("- one\n- two\n\n1. first\n2. second\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<ol>"));
    }

    #[test]
    fn test_tables() {
        let renderer = CommonMarkRenderer::new();
        let md = "| A | B |\n|---|---|\n| 1 | 2 |\n";
        let html = renderer.render(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(CommonMarkRenderer::new().render(""), "");
    }

    #[test]
    fn test_closure_renderer() {
        let upper = |text: &str| text.to_uppercase();
        assert_eq!(upper.render("abc"), "ABC");
    }
}
