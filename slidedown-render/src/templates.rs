//! Askama template definitions.

use askama::Template;
use serde::Serialize;
use slidedown_core::Slide;

/// Which built-in body layout a template set uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One article per slide
    Deck,
    /// Navigation list of slide titles followed by the slides
    Outline,
    /// No templates at all; flat raw-mode page
    Raw,
}

impl Layout {
    pub fn for_template(name: &str) -> Self {
        if name == "plain" {
            Layout::Raw
        } else if name.starts_with("menu") {
            Layout::Outline
        } else {
            Layout::Deck
        }
    }
}

/// Slide deck body
#[derive(Template)]
#[template(path = "deck.html")]
pub struct DeckTemplate<'a> {
    pub title: &'a str,
    pub slides: &'a [Slide],
}

/// Menu-style body with a title index
#[derive(Template)]
#[template(path = "outline.html")]
pub struct OutlineTemplate<'a> {
    pub title: &'a str,
    pub slides: &'a [Slide],
    pub menu: Vec<MenuItem>,
}

/// One entry of the outline menu
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub anchor: String,
    pub label: String,
    pub segue: bool,
}

impl<'a> OutlineTemplate<'a> {
    /// Build the menu, cutting titles to `menu_width` characters
    pub fn new(title: &'a str, slides: &'a [Slide], menu_width: usize) -> Self {
        let menu = slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| !slide.title.is_empty())
            .map(|(idx, slide)| MenuItem {
                anchor: format!("slide-{}", idx + 1),
                label: slide.short_title(menu_width).to_string(),
                segue: slide.segue,
            })
            .collect();

        Self {
            title,
            slides,
            menu,
        }
    }
}

/// A document shown in the directory listing
#[derive(Debug, Clone, Serialize)]
pub struct ListingEntry {
    pub name: String,
    pub url: String,
    pub kind: String,
    /// Title of the first slide, empty for non-markdown documents
    pub title: String,
}

/// Directory listing page
#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingTemplate<'a> {
    pub title: &'a str,
    pub entries: &'a [ListingEntry],
}
