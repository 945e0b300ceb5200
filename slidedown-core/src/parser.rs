//! Slide parsing: directive extraction followed by rendering.

use crate::config::SlideDefaults;
use crate::directive::{classify, is_segue, DirectiveMatch, Field};
use crate::markdown::MarkdownRenderer;
use crate::models::Slide;
use crate::postprocess::PostProcessor;
use crate::splitter::split_slides;

/// Fields collected from one slide body before anything is rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideSource {
    pub title: String,
    pub subtitle: String,
    pub class: String,
    pub image: Option<String>,
    pub background_image: Option<String>,
    /// Note values joined with newlines, in source order
    pub note: String,
    /// Non-directive lines joined with newlines
    pub body: String,
    pub build_lists: bool,
    pub segue: bool,
}

impl SlideSource {
    /// Single pass over the lines of `body`.
    ///
    /// Directive lines update fields (last one wins, notes accumulate);
    /// everything else is kept verbatim as markdown.
    pub fn scan(body: &str) -> Self {
        let mut source = SlideSource::default();
        let mut text: Vec<&str> = Vec::new();

        for line in body.split('\n') {
            let matches = classify(line);

            for m in &matches {
                source.apply(m);
            }
            if is_segue(line) {
                source.segue = true;
            }
            if matches.is_empty() {
                text.push(line);
            }
        }

        source.body = text.join("\n");
        source
    }

    fn apply(&mut self, m: &DirectiveMatch<'_>) {
        match m.field {
            Field::Title => self.title = m.value.to_string(),
            Field::Subtitle => self.subtitle = m.value.to_string(),
            Field::Class => self.class = m.value.to_string(),
            Field::Image => self.image = Some(m.value.to_string()),
            Field::BackgroundImage => self.background_image = Some(m.value.to_string()),
            Field::BuildLists => self.build_lists = true,
            Field::Note => {
                if !m.value.is_empty() {
                    if !self.note.is_empty() {
                        self.note.push('\n');
                    }
                    self.note.push_str(m.value);
                }
            }
        }
    }
}

/// Turns slide bodies into rendered [`Slide`] records
pub struct SlideParser<'a> {
    renderer: &'a dyn MarkdownRenderer,
    defaults: &'a SlideDefaults,
}

impl<'a> SlideParser<'a> {
    pub fn new(renderer: &'a dyn MarkdownRenderer, defaults: &'a SlideDefaults) -> Self {
        Self { renderer, defaults }
    }

    pub fn renderer(&self) -> &'a dyn MarkdownRenderer {
        self.renderer
    }

    /// Parse one slide body. Never fails; an empty body gives an empty slide.
    pub fn parse(&self, filename: &str, body: &str) -> Slide {
        let source = SlideSource::scan(body);
        let rendered =
            PostProcessor::new(self.renderer).process(&source.body, &source.note, source.build_lists);

        Slide {
            filename: filename.to_string(),
            title: source.title,
            subtitle: source.subtitle,
            class: source.class,
            html: rendered.html,
            image: source.image.unwrap_or_else(|| self.defaults.image.clone()),
            background_image: source
                .background_image
                .unwrap_or_else(|| self.defaults.background_image.clone()),
            segue: source.segue,
            build_lists: source.build_lists,
            note: rendered.note,
        }
    }

    /// Split a whole document and parse every slide in order
    pub fn parse_document(&self, filename: &str, text: &str) -> Vec<Slide> {
        let slides: Vec<Slide> = split_slides(text)
            .into_iter()
            .map(|body| self.parse(filename, body))
            .collect();
        tracing::debug!("Parsed {} slides from {}", slides.len(), filename);
        slides
    }
}
