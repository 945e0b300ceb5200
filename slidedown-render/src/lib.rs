//! # slidedown-render
//!
//! Template rendering library for slidedown.
//!
//! This crate renders parsed slides through Askama layouts and wraps them
//! in the head and foot chrome loaded from a template set.

pub mod publish;
pub mod templates;

pub use publish::{PublishError, Publisher};
pub use templates::{
    DeckTemplate, Layout, ListingEntry, ListingTemplate, MenuItem, OutlineTemplate,
};
