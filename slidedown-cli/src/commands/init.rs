//! Init command implementation.

use anyhow::{Context, Result};
use include_dir::{include_dir, Dir};
use std::fs;
use std::path::Path;

static SCAFFOLD: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/scaffold");

/// Initialize a new slidedown project
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    for file in SCAFFOLD.files() {
        let target = root.join(file.path());
        if target.exists() {
            println!("{:?} already exists, skipping", target);
            continue;
        }
        fs::write(&target, file.contents())
            .with_context(|| format!("Failed to write {:?}", target))?;
        println!("Created {:?}", target);
    }

    println!("✓ slidedown initialized in {:?}", root);
    println!("  - Edit slidedown.yml to change defaults");
    println!("  - Run `slidedown serve` and open /slides/welcome.md");
    Ok(())
}
