//! Configuration for `jsxmark.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                   |
//! |------------|-------------------------------------------|
//! | `[render]` | Document-level output (doctype, newline)  |
//! | `[log]`    | Verbose logging                           |
//!
//! Every field is optional. Unknown fields are reported and ignored.

mod error;

pub use error::ConfigError;

use crate::{debug, log};
use serde::Deserialize;
use std::{fs, path::Path};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "jsxmark.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing jsxmark.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub render: RenderConfig,

    /// Logging settings
    pub log: LogConfig,
}

/// `[render]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix output with `<!DOCTYPE html>`.
    pub doctype: bool,

    /// End output with a newline.
    pub trailing_newline: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            doctype: false,
            trailing_newline: true,
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Print debug messages.
    pub verbose: bool,
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing file falls back to defaults unless `required` is set, which
    /// is the case when the path was given explicitly.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if !path.exists() {
            if required {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            debug!("config"; "{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::from_path(path)?;
        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }
}
