//! # slidedown-core
//!
//! Core library for slidedown.
//!
//! This crate splits annotated markdown documents into slides, extracts the
//! directive lines that carry slide metadata, and renders what remains.

pub mod assemble;
pub mod config;
pub mod directive;
pub mod helpers;
pub mod loader;
pub mod markdown;
pub mod models;
pub mod parser;
pub mod postprocess;
pub mod routes;
pub mod splitter;
pub mod wiki;

pub use assemble::{compose_page, passthrough, raw_document, raw_slide, wrap_head_and_foot};
pub use config::{Config, ConfigError, ServerConfig, SlideDefaults};
pub use directive::{classify, is_segue, Directive, DirectiveMatch, Field, DIRECTIVES};
pub use loader::{load, load_slides, markdown_filename};
pub use markdown::{CommonMarkRenderer, MarkdownRenderer};
pub use models::{DocumentKind, Slide};
pub use parser::{SlideParser, SlideSource};
pub use postprocess::{mark_build_lists, PostProcessor};
pub use routes::{classify_request, Route};
pub use splitter::{split_slides, SLIDE_DELIMITER};
pub use wiki::{render_wiki_page, CreoleRenderer, WikiError, WikiRenderer};
