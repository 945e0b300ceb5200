//! Render a single document to stdout.

use crate::RenderMode;
use anyhow::{bail, Context, Result};
use slidedown_core::Config;
use slidedown_render::Publisher;

/// Render `filename` in the requested mode and print it.
pub fn render_document(config: Config, filename: &str, mode: RenderMode, json: bool) -> Result<()> {
    let publisher = Publisher::new(config);

    if json {
        let slides = publisher
            .slides(filename)
            .with_context(|| format!("Document '{}' not found", filename))?;
        println!("{}", serde_json::to_string_pretty(&slides)?);
        return Ok(());
    }

    let output = match mode {
        RenderMode::Raw => publisher.markup_raw(filename),
        RenderMode::Slides => publisher
            .try_markup_markdown(filename)
            .with_context(|| format!("Failed to render '{}'", filename))?,
        RenderMode::Passthrough => publisher
            .markup_passthrough(filename)
            .with_context(|| format!("Document '{}' not found", filename))?,
    };

    if output.is_empty() {
        bail!("Document '{}' produced no output", filename);
    }

    print!("{output}");
    Ok(())
}
