//! # slidedown CLI
//!
//! Command-line interface and HTTP server for slidedown presentations.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use slidedown_core::Config;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slidedown")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(long, default_value = "slidedown.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

/// Command-line values that take precedence over the config file
#[derive(Args)]
struct Overrides {
    /// Template set name (`{name}-head.thtml`, ...); `plain` selects raw mode
    #[arg(long, global = true)]
    template: Option<String>,

    /// Directory holding template files
    #[arg(long, global = true)]
    templates_dir: Option<PathBuf>,

    /// Directory documents are loaded from
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Directory static files are served from
    #[arg(long, global = true)]
    web_root: Option<PathBuf>,

    /// Default slide image, relative to the web root
    #[arg(long, global = true)]
    image: Option<String>,

    /// Default slide background image, relative to the web root
    #[arg(long, global = true)]
    background_image: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve documents over HTTP
    Serve {
        /// Listen address, e.g. 0.0.0.0:8080
        #[arg(long)]
        address: Option<String>,
    },

    /// Render a single document to stdout
    Render {
        /// Markdown file name (".md" is appended when missing)
        filename: String,

        /// Output mode
        #[arg(long, value_enum, default_value_t = RenderMode::Slides)]
        mode: RenderMode,

        /// Print the parsed slide records as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// List documents in the content directory
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Scaffold a config, template set and sample deck
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
pub enum RenderMode {
    /// Flat page, every slide concatenated
    Raw,
    /// Through the configured template set
    Slides,
    /// Whole document as plain markdown
    Passthrough,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_project(path.as_deref()),
        Commands::Serve { address } => {
            let mut config = load_config(&cli.config, &cli.overrides)?;
            if let Some(address) = address {
                config.server.address = address;
            }
            commands::serve(config).await
        }
        Commands::Render {
            filename,
            mode,
            json,
        } => {
            let config = load_config(&cli.config, &cli.overrides)?;
            commands::render_document(config, &filename, mode, json)
        }
        Commands::List { json } => {
            let config = load_config(&cli.config, &cli.overrides)?;
            commands::list_documents(config, json)
        }
    }
}

fn load_config(path: &Path, overrides: &Overrides) -> Result<Config> {
    let mut config = Config::load_or_default(path)
        .with_context(|| format!("Failed to load configuration from {:?}", path))?;

    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    if let Some(template) = &overrides.template {
        config.template = template.clone();
    }
    if let Some(dir) = &overrides.templates_dir {
        config.templates_dir = cwd.join(dir);
    }
    if let Some(dir) = &overrides.content_dir {
        config.content_dir = cwd.join(dir);
    }
    if let Some(dir) = &overrides.web_root {
        config.web_root = cwd.join(dir);
    }
    if let Some(image) = &overrides.image {
        config.image = image.clone();
    }
    if let Some(background) = &overrides.background_image {
        config.background_image = background.clone();
    }

    Ok(config)
}
