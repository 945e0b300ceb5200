//! Page assembly for raw and passthrough output.

use crate::helpers::html_escape;
use crate::markdown::MarkdownRenderer;
use crate::models::Slide;
use crate::parser::SlideParser;
use crate::splitter::split_slides;

/// Flatten one slide for raw output.
///
/// Slides with notes emit only the body and the note; slides without notes
/// lead with their title and subtitle lines.
pub fn raw_slide(slide: &Slide) -> String {
    if slide.has_note() {
        format!("{}\nNote\n{}", slide.html, slide.note)
    } else {
        format!("{}\n{}\n{}", slide.title, slide.subtitle, slide.html)
    }
}

/// Render a whole document as one flat HTML page.
///
/// The flattened slides are fed through the markdown renderer once more
/// before being wrapped, so stray title lines become paragraphs.
pub fn raw_document(parser: &SlideParser<'_>, filename: &str, text: &str) -> String {
    let flattened: String = split_slides(text)
        .into_iter()
        .map(|body| raw_slide(&parser.parse(filename, body)))
        .collect();

    raw_page(filename, &parser.renderer().render(&flattened))
}

/// Whole document as a single markdown conversion, no slide handling
pub fn passthrough(renderer: &dyn MarkdownRenderer, text: &str) -> String {
    renderer.render(text)
}

/// Document skeleton used by raw mode
pub fn raw_page(filename: &str, html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n\n<title>\n   {}\n</title>\n<body>\n{}\n</body>\n</html>\n",
        html_escape(filename),
        html
    )
}

/// Document skeleton used for wiki pages
pub fn wrap_head_and_foot(filename: &str, html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n\n<title>\n   {}\n</title>\n<body>\n {}\n</body>\n</html>\n",
        html_escape(filename),
        html
    )
}

/// Join template chrome around a rendered body
pub fn compose_page(head: &str, body: &str, foot: &str) -> String {
    format!("{head}\n{body}\n{foot}\n")
}
