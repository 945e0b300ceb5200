//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the slidedown.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Template set name; selects `{template}-head.thtml` and friends
    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_dir")]
    pub templates_dir: PathBuf,

    /// Directory markdown and wiki documents are loaded from
    #[serde(default = "default_dir")]
    pub content_dir: PathBuf,

    /// Directory static files are served from
    #[serde(default = "default_dir")]
    pub web_root: PathBuf,

    /// Default slide image, relative to the web root
    #[serde(default = "default_image")]
    pub image: String,

    /// Default slide background image, relative to the web root
    #[serde(default = "default_background_image")]
    pub background_image: String,

    #[serde(default)]
    pub server: ServerConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_template() -> String {
    String::from("slides")
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_image() -> String {
    String::from("../images/sphere.png")
}

fn default_background_image() -> String {
    String::from("../images/background.png")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,

    /// Seconds allowed for reading a request
    #[serde(default = "default_timeout")]
    pub read_timeout: u64,

    /// Seconds allowed for producing a response
    #[serde(default = "default_timeout")]
    pub write_timeout: u64,
}

fn default_address() -> String {
    String::from("127.0.0.1:8080")
}

fn default_timeout() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            read_timeout: default_timeout(),
            write_timeout: default_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: default_template(),
            templates_dir: default_dir(),
            content_dir: default_dir(),
            web_root: default_dir(),
            image: default_image(),
            background_image: default_background_image(),
            server: ServerConfig::default(),
            config_path: None,
        }
    }
}

/// Values substituted into a slide when it carries no `image:` or
/// `background:` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDefaults {
    pub image: String,
    pub background_image: String,
}

impl Default for SlideDefaults {
    fn default() -> Self {
        Self {
            image: default_image(),
            background_image: default_background_image(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn slide_defaults(&self) -> SlideDefaults {
        SlideDefaults {
            image: self.image.clone(),
            background_image: self.background_image.clone(),
        }
    }

    /// Get the templates directory, resolved relative to config file
    pub fn templates_path(&self) -> PathBuf {
        self.resolve_path(&self.templates_dir)
    }

    /// Get the content directory, resolved relative to config file
    pub fn content_path(&self) -> PathBuf {
        self.resolve_path(&self.content_dir)
    }

    /// Get the static web root, resolved relative to config file
    pub fn web_root_path(&self) -> PathBuf {
        self.resolve_path(&self.web_root)
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(config_path) = &self.config_path {
            if let Some(parent) = config_path.parent() {
                parent.join(path)
            } else {
                path.to_path_buf()
            }
        } else {
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.template, "slides");
        assert_eq!(config.image, "../images/sphere.png");
        assert_eq!(config.background_image, "../images/background.png");
        assert_eq!(config.server.address, "127.0.0.1:8080");
        assert_eq!(config.server.write_timeout, 10);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("slidedown.yml");
        fs::write(
            &path,
            "template: menu1\nimage: logo.png\nserver:\n  address: 0.0.0.0:9000\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.template, "menu1");
        assert_eq!(config.image, "logo.png");
        assert_eq!(config.background_image, "../images/background.png");
        assert_eq!(config.server.address, "0.0.0.0:9000");
        assert_eq!(config.server.read_timeout, 10);
        assert_eq!(config.content_path(), dir.path().join("."));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.yml")).unwrap();
        assert_eq!(config.template, "slides");
    }

    #[test]
    fn test_slide_defaults_follow_config() {
        let config = Config {
            image: "a.png".into(),
            background_image: "b.png".into(),
            ..Config::default()
        };
        let defaults = config.slide_defaults();
        assert_eq!(defaults.image, "a.png");
        assert_eq!(defaults.background_image, "b.png");
    }
}
