//! HTML post-processing applied once a slide has been scanned.

use crate::markdown::MarkdownRenderer;

/// Render note and body markdown, then mark lists for incremental reveal.
pub struct PostProcessor<'a> {
    renderer: &'a dyn MarkdownRenderer,
}

/// Rendered output of one slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub note: String,
}

impl<'a> PostProcessor<'a> {
    pub fn new(renderer: &'a dyn MarkdownRenderer) -> Self {
        Self { renderer }
    }

    /// Notes are rendered on their own, never mixed into the body markdown.
    pub fn process(&self, body: &str, note: &str, build_lists: bool) -> Rendered {
        let note = if note.is_empty() {
            String::new()
        } else {
            self.renderer.render(note)
        };

        let mut html = self.renderer.render(body);
        if build_lists {
            html = mark_build_lists(&html);
        }

        Rendered { html, note }
    }
}

/// Add `class="build"` to every bare `<ul>` and `<ol>` opening tag.
///
/// Tags that already carry attributes are left alone.
pub fn mark_build_lists(html: &str) -> String {
    html.replace("<ul>", "<ul class=\"build\">")
        .replace("<ol>", "<ol class=\"build\">")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::CommonMarkRenderer;

    #[test]
    fn test_mark_build_lists_replaces_all() {
        let html = "<ul><li>a</li></ul><ol><li>b</li></ol><ul><li>c</li></ul>";
        let marked = mark_build_lists(html);
        assert_eq!(marked.matches("<ul class=\"build\">").count(), 2);
        assert_eq!(marked.matches("<ol class=\"build\">").count(), 1);
        assert!(!marked.contains("<ul>"));
        assert!(!marked.contains("<ol>"));
    }

    #[test]
    fn test_attributed_tags_untouched() {
        let html = "<ol start=\"3\"><li>x</li></ol><ul id=\"k\"></ul>";
        assert_eq!(mark_build_lists(html), html);
    }

    #[test]
    fn test_note_rendered_separately() {
        let renderer = |text: &str| format!("[{text}]");
        let processor = PostProcessor::new(&renderer);
        let out = processor.process("body", "note text", false);
        assert_eq!(out.html, "[body]");
        assert_eq!(out.note, "[note text]");
    }

    #[test]
    fn test_empty_note_not_rendered() {
        let renderer = |text: &str| format!("[{text}]");
        let processor = PostProcessor::new(&renderer);
        assert_eq!(processor.process("", "", false).note, "");
    }

    #[test]
    fn test_build_lists_with_real_renderer() {
        let renderer = CommonMarkRenderer::new();
        let processor = PostProcessor::new(&renderer);
        let out = processor.process("- a\n- b\n\n1. c\n2. d\n", "", true);
        assert!(out.html.contains("<ul class=\"build\">"));
        assert!(out.html.contains("<ol class=\"build\">"));
        assert!(!out.html.contains("<ul>"));
        assert!(!out.html.contains("<ol>"));
    }
}
