//! Turning documents on disk into complete pages.

use crate::templates::{DeckTemplate, Layout, ListingEntry, ListingTemplate, OutlineTemplate};
use askama::Template;
use slidedown_core::{
    compose_page, load, load_slides, markdown_filename, passthrough, raw_document,
    render_wiki_page, split_slides, CommonMarkRenderer, Config,
    CreoleRenderer, DocumentKind, MarkdownRenderer, Slide, SlideDefaults, SlideParser,
    SlideSource, WikiRenderer,
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Characters shown per entry in outline menus
const MENU_WIDTH: usize = 32;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Document not found: {0:?}")]
    MissingDocument(PathBuf),

    #[error("Template file not found: {0:?}")]
    MissingTemplate(PathBuf),

    #[error("Template evaluation error: {0}")]
    Template(#[from] askama::Error),
}

/// Renders markdown and wiki documents into full pages
pub struct Publisher {
    config: Config,
    defaults: SlideDefaults,
    markdown: Box<dyn MarkdownRenderer>,
    wiki: Box<dyn WikiRenderer>,
}

impl Publisher {
    pub fn new(config: Config) -> Self {
        Self::with_renderers(
            config,
            Box::new(CommonMarkRenderer::new()),
            Box::new(CreoleRenderer::new()),
        )
    }

    pub fn with_renderers(
        config: Config,
        markdown: Box<dyn MarkdownRenderer>,
        wiki: Box<dyn WikiRenderer>,
    ) -> Self {
        let defaults = config.slide_defaults();
        Self {
            config,
            defaults,
            markdown,
            wiki,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn parser(&self) -> SlideParser<'_> {
        SlideParser::new(self.markdown.as_ref(), &self.defaults)
    }

    fn content_file(&self, filename: &str) -> PathBuf {
        self.config.content_path().join(filename)
    }

    /// Parsed slides of a markdown document, `.md` appended if missing
    pub fn slides(&self, filename: &str) -> Option<Vec<Slide>> {
        load_slides(&self.parser(), &self.config.content_path(), filename)
    }

    /// Markdown document through the configured template set.
    ///
    /// Failures are logged and produce an empty page.
    pub fn markup_markdown(&self, filename: &str) -> String {
        match self.try_markup_markdown(filename) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to publish {}: {}", filename, e);
                String::new()
            }
        }
    }

    pub fn try_markup_markdown(&self, filename: &str) -> Result<String, PublishError> {
        match Layout::for_template(&self.config.template) {
            Layout::Raw => self.try_markup_raw(filename),
            layout => self.try_markup_templated(filename, layout),
        }
    }

    /// Flat raw-mode page, empty when the document is missing
    pub fn markup_raw(&self, filename: &str) -> String {
        self.try_markup_raw(filename).unwrap_or_else(|e| {
            tracing::warn!("Failed to publish {}: {}", filename, e);
            String::new()
        })
    }

    fn try_markup_raw(&self, filename: &str) -> Result<String, PublishError> {
        let filename = markdown_filename(filename);
        let path = self.content_file(&filename);
        let text = load(&path).ok_or(PublishError::MissingDocument(path))?;
        Ok(raw_document(&self.parser(), &filename, &text))
    }

    fn try_markup_templated(&self, filename: &str, layout: Layout) -> Result<String, PublishError> {
        let head = self.template_part("head")?;
        let foot = self.template_part("foot")?;

        let slides = self
            .slides(filename)
            .ok_or_else(|| PublishError::MissingDocument(self.content_file(filename)))?;

        let body = match layout {
            Layout::Outline => OutlineTemplate::new(filename, &slides, MENU_WIDTH).render()?,
            _ => DeckTemplate {
                title: filename,
                slides: &slides,
            }
            .render()?,
        };

        Ok(compose_page(&head, &body, &foot))
    }

    fn template_part(&self, part: &str) -> Result<String, PublishError> {
        let path = self
            .config
            .templates_path()
            .join(format!("{}-{}.thtml", self.config.template, part));
        load(&path).ok_or(PublishError::MissingTemplate(path))
    }

    /// Whole markdown document as one conversion, without slide handling
    pub fn markup_passthrough(&self, filename: &str) -> Option<String> {
        let text = load(&self.content_file(&markdown_filename(filename)))?;
        Some(passthrough(self.markdown.as_ref(), &text))
    }

    /// Wiki page wrapped in the document skeleton.
    ///
    /// `None` when the file is missing; an empty string when conversion fails.
    pub fn markup_wiki(&self, filename: &str) -> Option<String> {
        let text = load(&self.content_file(filename))?;
        Some(render_wiki_page(self.wiki.as_ref(), filename, &text))
    }

    /// Documents directly under the content directory, sorted by name
    pub fn listing_entries(&self) -> Vec<ListingEntry> {
        list_documents(&self.config.content_path(), &self.config.template)
    }

    pub fn listing(&self) -> Result<String, PublishError> {
        let entries = self.listing_entries();
        Ok(ListingTemplate {
            title: "Documents",
            entries: &entries,
        }
        .render()?)
    }
}

fn list_documents(dir: &Path, template: &str) -> Vec<ListingEntry> {
    let section = if Layout::for_template(template) == Layout::Raw {
        "plain"
    } else {
        "slides"
    };

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            let kind = DocumentKind::from_filename(&name)?;
            let (url, title) = match kind {
                DocumentKind::Markdown => {
                    let title = load(entry.path())
                        .map(|text| first_title(&text))
                        .unwrap_or_default();
                    (format!("/{section}/{name}"), title)
                }
                DocumentKind::Wiki => (format!("/wiki/{name}"), String::new()),
                DocumentKind::Html => (format!("/{name}"), String::new()),
            };
            Some(ListingEntry {
                name,
                url,
                kind: kind.as_str().to_string(),
                title,
            })
        })
        .collect()
}

fn first_title(text: &str) -> String {
    split_slides(text)
        .into_iter()
        .map(|body| SlideSource::scan(body).title)
        .find(|title| !title.is_empty())
        .unwrap_or_default()
}
