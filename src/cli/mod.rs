//! Command-line interface module.

mod args;
pub mod kebab;
pub mod render;

pub use args::{Cli, Commands, RenderArgs};

use anyhow::{Context, Result};
use jsxmark::config::{Config, DEFAULT_CONFIG};
use std::path::Path;

/// Load the config named by `--config`, or the optional default file.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let (path, required) = match &cli.config {
        Some(path) => (path.as_path(), true),
        None => (Path::new(DEFAULT_CONFIG), false),
    };
    Config::load(path, required).with_context(|| format!("failed to load {}", path.display()))
}
