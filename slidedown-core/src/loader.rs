//! Loading documents from disk.

use crate::helpers::is_markdown;
use crate::models::Slide;
use crate::parser::SlideParser;
use std::fs;
use std::path::Path;

/// Read a text file; any failure is reported as absence.
pub fn load(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!("Could not load {:?}: {}", path, e);
            None
        }
    }
}

/// Append `.md` unless the name already carries it
pub fn markdown_filename(filename: &str) -> String {
    if is_markdown(filename) {
        filename.to_string()
    } else {
        format!("{filename}.md")
    }
}

/// Load a markdown document from `dir` and parse it into slides
pub fn load_slides(parser: &SlideParser<'_>, dir: &Path, filename: &str) -> Option<Vec<Slide>> {
    let filename = markdown_filename(filename);
    let text = load(&dir.join(&filename))?;
    Some(parser.parse_document(&filename, &text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlideDefaults;
    use tempfile::tempdir;

    #[test]
    fn test_markdown_filename() {
        assert_eq!(markdown_filename("talk"), "talk.md");
        assert_eq!(markdown_filename("talk.md"), "talk.md");
        assert_eq!(markdown_filename("md"), "md.md");
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(load(&dir.path().join("nope.md")), None);
    }

    #[test]
    fn test_load_slides_adds_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("talk.md"), "title: A\n---\ntitle: B").unwrap();

        let renderer = |text: &str| text.to_string();
        let defaults = SlideDefaults::default();
        let parser = SlideParser::new(&renderer, &defaults);

        let slides = load_slides(&parser, dir.path(), "talk").unwrap();
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].filename, "talk.md");
        assert_eq!(slides[1].title, "B");
        assert!(load_slides(&parser, dir.path(), "missing").is_none());
    }
}
