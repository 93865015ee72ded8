//! Configuration loading and parsing for `changelogs.toml` files.
use log::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{ChangelogsError, Result};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "changelogs.toml";
/// Default number of spaces written before each changelog line.
pub const DEFAULT_INDENT: usize = 4;
/// Default heading written before a batch of changelog lines.
pub const DEFAULT_HEADING: &str = "CHANGELOGS:";

const MAX_INDENT: usize = 32;

/// Root configuration structure for `changelogs.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct Config {
    /// Number of spaces prefixed to each changelog line (default: 4)
    pub indent: usize,
    /// Heading printed above a batch of changelog lines
    pub heading: String,
    /// Includes packages-dev when comparing lock files (default: true)
    pub include_dev: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            heading: DEFAULT_HEADING.into(),
            include_dev: true,
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;

        if config.indent > MAX_INDENT {
            return Err(ChangelogsError::invalid_config(format!(
                "indent must be at most {MAX_INDENT}, got {}",
                config.indent
            )));
        }

        Ok(config)
    }

    /// Load configuration from `path` when given, otherwise from
    /// [`DEFAULT_CONFIG_FILE`] in the working directory if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        info!("loading configuration: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The prefix written before each changelog line.
    pub fn pad(&self) -> String {
        " ".repeat(self.indent)
    }
}
