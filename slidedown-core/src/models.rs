//! Slide records and document kinds.

use crate::helpers::{cut, first_word};
use serde::{Deserialize, Serialize};

/// One delimiter-separated section of a document, fully rendered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Source document name, carried through for display
    pub filename: String,

    pub title: String,
    pub subtitle: String,
    pub class: String,

    /// Rendered body HTML
    pub html: String,

    pub image: String,
    pub background_image: String,

    /// Set when a `class:` directive names a segue
    pub segue: bool,

    pub build_lists: bool,

    /// Rendered note HTML, empty when the slide has no notes
    pub note: String,
}

impl Slide {
    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }

    /// Title truncated to `n` graphemes, for menus
    pub fn short_title(&self, n: usize) -> &str {
        cut(&self.title, n)
    }

    /// First word of the class list
    pub fn primary_class(&self) -> &str {
        first_word(&self.class)
    }
}

/// Kinds of documents the publisher knows how to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Markdown,
    Wiki,
    Html,
}

impl DocumentKind {
    pub fn from_filename(filename: &str) -> Option<Self> {
        if crate::helpers::is_markdown(filename) {
            Some(DocumentKind::Markdown)
        } else if crate::helpers::is_wiki(filename) {
            Some(DocumentKind::Wiki)
        } else if crate::helpers::is_html(filename) {
            Some(DocumentKind::Html)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Markdown => "markdown",
            DocumentKind::Wiki => "wiki",
            DocumentKind::Html => "html",
        }
    }
}
