//! List documents in the content directory.

use anyhow::Result;
use slidedown_core::Config;
use slidedown_render::Publisher;

pub fn list_documents(config: Config, json: bool) -> Result<()> {
    let publisher = Publisher::new(config);
    let entries = publisher.listing_entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!(
            "No documents found in {:?}",
            publisher.config().content_path()
        );
        return Ok(());
    }

    for entry in &entries {
        if entry.title.is_empty() {
            println!("{:<8} {}", entry.kind, entry.url);
        } else {
            println!("{:<8} {}  {}", entry.kind, entry.url, entry.title);
        }
    }

    Ok(())
}
